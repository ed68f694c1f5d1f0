use crate::app::ThemeContext;
use common::theme::palette;
use leptos::prelude::*;
use leptos_router::components::A;

/// Landing page for a quick-action target that has no screen of its own yet.
#[component]
pub fn DestinationPage(title: &'static str, description: &'static str) -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    view! {
        <div class=move || palette::PAGE.pick(theme.mode.get())>
            <div class="max-w-7xl mx-auto">
                <h1 class=move || palette::HEADER_TITLE.pick(theme.mode.get())>{title}</h1>
                <p class=move || palette::HEADER_SUBTITLE.pick(theme.mode.get())>{description}</p>
                <A href="/" attr:class="mt-4 inline-block text-sm font-medium text-blue-600">
                    "Back to dashboard"
                </A>
            </div>
        </div>
    }
}
