use leptos::prelude::*;

#[component]
pub fn ErrorTemplate(errors: ArcRwSignal<Errors>) -> impl IntoView {
    view! {
        <div class="p-6">
            <h2 class="text-lg font-semibold text-red-600">"Something went wrong"</h2>
            <ul class="mt-2 text-sm text-red-500">
                {move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|(_, error)| view! { <li>{error.to_string()}</li> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
