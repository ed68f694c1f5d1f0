use crate::app::components::icon::IconSvg;
use crate::app::{ThemeContext, UserSignal};
use crate::error_template::ErrorTemplate;
use crate::practice::get_dashboard_data;
use common::compose::{
    compose_dashboard, HeaderModel, QuickActionTile, QuickActionsModel, ScheduleModel,
    ScheduleRowModel, StatCardModel, StatusMarker,
};
use common::{CurrentUser, DashboardData, Icon, Navigator, ThemeMode};
use leptos::either::Either;
use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let user = expect_context::<UserSignal>();
    let theme = expect_context::<ThemeContext>();
    let data = Resource::new_blocking(|| (), |_| get_dashboard_data());
    let navigate = use_navigate();

    view! {
        <Suspense fallback=|| "Loading...".into_view()>
            <ErrorBoundary fallback=|errors| {
                view! { <ErrorTemplate errors=errors /> }
            }>
                {move || {
                    let navigate = navigate.clone();
                    Suspend::new(async move {
                        data.await
                            .map(|data| {
                                let navigator = move |path: &str| {
                                    log!("quick action -> {}", path);
                                    navigate(path, Default::default());
                                };
                                view! {
                                    <DashboardView user=user theme=theme.mode data=data navigator=navigator />
                                }
                            })
                    })
                }}
            </ErrorBoundary>
        </Suspense>
    }
}

/// Re-composes the whole dashboard whenever identity or theme changes.
#[component]
pub fn DashboardView<N>(
    #[prop(into)] user: Signal<Option<CurrentUser>>,
    #[prop(into)] theme: Signal<ThemeMode>,
    data: DashboardData,
    navigator: N,
) -> impl IntoView
where
    N: Navigator + Clone + Send + Sync + 'static,
{
    move || {
        let model = user.with(|user| compose_dashboard(user.as_ref(), theme.get(), &data));
        let navigator = navigator.clone();
        view! {
            <div class=model.page_class data-theme=model.theme.to_string()>
                <div class="max-w-7xl mx-auto">
                    <WelcomeHeader header=model.header />
                    <StatCardGrid stats=model.stats />
                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                        <ScheduleList schedule=model.schedule />
                        <QuickActionGrid actions=model.actions navigator=navigator />
                    </div>
                </div>
            </div>
        }
    }
}

#[component]
fn WelcomeHeader(header: HeaderModel) -> impl IntoView {
    view! {
        <div class="mb-8">
            <h1 class=header.title_class>{header.title}</h1>
            <p class=header.subtitle_class data-role="greeting">{header.greeting}</p>
            <p class=header.subtitle_class>{header.subtitle}</p>
        </div>
    }
}

#[component]
fn StatCardGrid(stats: Vec<StatCardModel>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
            {stats
                .into_iter()
                .map(|StatCardModel { title, value, icon, card_class, label_class, value_class, icon_class }| {
                    view! {
                        <div class=card_class data-card="stat">
                            <div class="flex items-center justify-between">
                                <div>
                                    <p class=label_class>{title}</p>
                                    <p class=value_class>{value}</p>
                                </div>
                                <IconSvg icon=icon class=icon_class />
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ScheduleList(schedule: ScheduleModel) -> impl IntoView {
    view! {
        <div class=format!("lg:col-span-2 {}", schedule.panel_class)>
            <h2 class=schedule.heading_class>{schedule.heading}</h2>
            <div class="p-6 space-y-4">
                {schedule
                    .rows
                    .into_iter()
                    .map(|row| view! { <ScheduleRow row=row /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ScheduleRow(row: ScheduleRowModel) -> impl IntoView {
    let ScheduleRowModel {
        time,
        patient,
        session_type,
        marker,
        marker_class,
        row_class,
        primary_class,
        secondary_class,
    } = row;
    let marker = match marker {
        StatusMarker::Check => {
            Either::Left(view! { <IconSvg icon=Icon::CheckCircle class=marker_class /> })
        }
        StatusMarker::Dot => {
            Either::Right(view! { <div class=marker_class data-marker="dot"></div> })
        }
    };

    view! {
        <div class=row_class data-row="appointment">
            <div class="flex items-center space-x-4">
                <div class="flex items-center space-x-2">
                    <IconSvg icon=Icon::Clock class=format!("h-4 w-4 {secondary_class}") />
                    <span class=primary_class>{time}</span>
                </div>
                <div>
                    <p class=primary_class>{patient}</p>
                    <p class=secondary_class>{session_type}</p>
                </div>
            </div>
            <div class="flex items-center">{marker}</div>
        </div>
    }
}

#[component]
fn QuickActionGrid<N>(actions: QuickActionsModel, navigator: N) -> impl IntoView
where
    N: Navigator + Clone + Send + Sync + 'static,
{
    view! {
        <div class=actions.panel_class>
            <h2 class=actions.heading_class>{actions.heading}</h2>
            <div class="p-6 space-y-3">
                {actions
                    .tiles
                    .into_iter()
                    .map(|tile| {
                        let navigator = navigator.clone();
                        let QuickActionTile {
                            icon,
                            title,
                            description,
                            tile_class,
                            icon_class,
                            title_class,
                            description_class,
                            ..
                        } = tile.clone();
                        view! {
                            <button
                                type="button"
                                class=tile_class
                                data-tile="quick-action"
                                on:click=move |_| tile.activate(&navigator)
                            >
                                <div class="flex items-center space-x-3">
                                    <IconSvg icon=icon class=icon_class />
                                    <div>
                                        <span class=title_class>{title}</span>
                                        <p class=description_class>{description}</p>
                                    </div>
                                </div>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn ignore_navigation(_: &str) {}

    fn render(user: Option<CurrentUser>, mode: ThemeMode) -> String {
        let owner = Owner::new();
        owner.with(|| {
            view! {
                <DashboardView
                    user=Signal::stored(user)
                    theme=Signal::stored(mode)
                    data=DashboardData::default()
                    navigator=ignore_navigation
                />
            }
            .to_html()
        })
    }

    fn assert_in_order(html: &str, needles: &[&str]) {
        let positions: Vec<usize> = needles
            .iter()
            .map(|needle| {
                html.find(needle)
                    .unwrap_or_else(|| panic!("{needle} missing from dashboard"))
            })
            .collect();
        assert!(
            positions.windows(2).all(|pair| pair[0] < pair[1]),
            "{needles:?} out of order"
        );
    }

    #[test]
    fn renders_every_section_for_lee() {
        let html = render(Some(CurrentUser::named("Lee")), ThemeMode::Light);

        assert!(html.contains("Welcome back, Dr. Lee!"));
        assert_eq!(html.matches("data-card=\"stat\"").count(), 4);
        assert_eq!(html.matches("data-row=\"appointment\"").count(), 4);
        assert_eq!(html.matches("data-tile=\"quick-action\"").count(), 4);

        assert_in_order(&html, &["Active Patients", "Unread Messages", "This Week"]);
        assert_in_order(
            &html,
            &["Sarah Johnson", "Michael Chen", "Emma Davis", "James Wilson"],
        );
        assert_in_order(
            &html,
            &["Schedule Appointment", "Add New Patient", "Send Message", "View Reports"],
        );
    }

    #[test]
    fn only_the_completed_appointment_gets_a_check() {
        let html = render(Some(CurrentUser::named("Lee")), ThemeMode::Light);
        assert_eq!(html.matches("data-icon=\"CheckCircle\"").count(), 1);
        assert_eq!(html.matches("data-marker=\"dot\"").count(), 3);
        assert_in_order(&html, &["Emma Davis", "data-icon=\"CheckCircle\"", "James Wilson"]);
    }

    #[test]
    fn dark_mode_leaves_no_light_classes() {
        let html = render(None, ThemeMode::Dark);
        assert!(html.contains("data-theme=\"dark\""));
        assert!(html.contains("bg-gray-900"));
        assert!(!html.contains("bg-white"));

        let light = render(None, ThemeMode::Light);
        assert!(light.contains("data-theme=\"light\""));
        assert!(!light.contains("bg-gray-800"));
    }

    #[test]
    fn absent_name_still_renders() {
        let html = render(None, ThemeMode::Light);
        assert!(html.contains("Welcome back!"));
        assert!(!html.contains("Dr."));
        assert_eq!(html.matches("data-card=\"stat\"").count(), 4);
    }
}
