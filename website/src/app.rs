use crate::app::components::theme_toggle::ThemeToggle;
use crate::app::pages::dashboard::DashboardPage;
use crate::app::pages::destination::DestinationPage;
use crate::practice::{get_current_user, get_default_theme};
use common::theme::palette;
use common::{CurrentUser, ThemeMode};

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

pub mod components;
pub mod pages;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

pub type UserSignal = Signal<Option<CurrentUser>>;

/// Theme served by the server until the user picks one with the toggle.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub mode: Signal<ThemeMode>,
    chosen: RwSignal<Option<ThemeMode>>,
}

impl ThemeContext {
    pub fn new(served: Signal<ThemeMode>) -> Self {
        let chosen = RwSignal::new(None::<ThemeMode>);
        let mode = Signal::derive(move || chosen.get().unwrap_or_else(|| served.get()));
        Self { mode, chosen }
    }

    pub fn toggle(&self) {
        let next = self.mode.get_untracked().toggled();
        self.chosen.set(Some(next));
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let identity = Resource::new_blocking(|| (), |_| get_current_user());
    let served_theme = Resource::new_blocking(|| (), |_| get_default_theme());

    let user: UserSignal = Signal::derive(move || identity.get().and_then(Result::ok));
    provide_context(user);
    let theme = ThemeContext::new(Signal::derive(move || {
        served_theme
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    }));
    provide_context(theme);

    view! {
        <Stylesheet id="leptos" href="/pkg/practice_dashboard.css" />
        <Title text="Therapist Dashboard" />

        <Router>
            <nav class=move || palette::NAV.pick(theme.mode.get())>
                <A href="/" attr:class="text-sm/6 font-semibold">"Dashboard"</A>
                <ThemeToggle />
            </nav>
            <main>
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("") view=DashboardPage />
                    <Route
                        path=path!("appointments/new")
                        view=|| view! {
                            <DestinationPage
                                title="Schedule Appointment"
                                description="Appointment booking is not available yet."
                            />
                        }
                    />
                    <Route
                        path=path!("patients/new")
                        view=|| view! {
                            <DestinationPage
                                title="Add New Patient"
                                description="Patient registration is not available yet."
                            />
                        }
                    />
                    <Route
                        path=path!("messages")
                        view=|| view! {
                            <DestinationPage
                                title="Send Message"
                                description="Messaging is not available yet."
                            />
                        }
                    />
                    <Route
                        path=path!("reports")
                        view=|| view! {
                            <DestinationPage
                                title="View Reports"
                                description="Reports are not available yet."
                            />
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_overrides_served_theme() {
        let owner = Owner::new();
        owner.with(|| {
            let served = RwSignal::new(ThemeMode::Dark);
            let theme = ThemeContext::new(served.into());
            assert_eq!(theme.mode.get_untracked(), ThemeMode::Dark);

            theme.toggle();
            assert_eq!(theme.mode.get_untracked(), ThemeMode::Light);

            served.set(ThemeMode::Light);
            theme.toggle();
            assert_eq!(theme.mode.get_untracked(), ThemeMode::Dark);
        });
    }
}
