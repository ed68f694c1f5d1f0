use crate::app::ThemeContext;
use common::ThemeMode;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let on_click = move |_| {
        theme.toggle();
        log!("theme switched to {}", theme.mode.get_untracked());
    };

    view! {
        <button
            type="button"
            class="text-sm/6 font-semibold rounded-lg px-3 py-1 border border-current"
            aria-pressed=move || theme.mode.get().is_dark().to_string()
            on:click=on_click
        >
            {move || match theme.mode.get() {
                ThemeMode::Light => "Dark mode",
                ThemeMode::Dark => "Light mode",
            }}
        </button>
    }
}
