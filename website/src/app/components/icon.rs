use common::Icon;
use leptos::prelude::*;

#[component]
pub fn IconSvg(icon: Icon, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-icon=icon.to_string()
        >
            {icon.paths().iter().copied().map(|d| view! { <path d=d /> }).collect_view()}
        </svg>
    }
}
