use common::data::DataError;
use leptos::prelude::{FromServerFnError, ServerFnErrorErr};
use leptos::server_fn::codec::JsonEncoding;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod app;
pub mod error_template;
pub mod practice;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

pub type AppResult<T> = Result<T, AppError>;
pub type ServerFnResult<T> = Result<T, AppError>;

#[derive(Debug, Error, Deserialize, Serialize, Clone)]
pub enum AppError {
    #[cfg(feature = "ssr")]
    #[error("DotEnv error: {0}")]
    DotEnv(String),
    #[cfg(feature = "ssr")]
    #[error("Leptos config error: {0}")]
    Config(String),
    #[cfg(feature = "ssr")]
    #[error("Io error: {0}")]
    Io(String),
    #[error("Dashboard data error: {0}")]
    Data(String),
    #[error("Server vars not found")]
    ServerVarsNotFound,
    #[error("ServerFnError {0}")]
    ServerFnError(#[from] ServerFnErrorErr),
}

macro_rules! impl_from_to_string {
    ($res:path, $from:ty) => {
        impl From<$from> for AppError {
            fn from(value: $from) -> Self {
                $res(value.to_string())
            }
        }
    };
}

impl_from_to_string!(AppError::Data, DataError);
#[cfg(feature = "ssr")]
impl_from_to_string!(AppError::DotEnv, dotenvy::Error);
#[cfg(feature = "ssr")]
impl_from_to_string!(AppError::Config, leptos::config::errors::LeptosConfigError);
#[cfg(feature = "ssr")]
impl_from_to_string!(AppError::Io, std::io::Error);

impl FromServerFnError for AppError {
    type Encoder = JsonEncoding;
    fn from_server_fn_error(value: ServerFnErrorErr) -> Self {
        value.into()
    }
}

#[cfg(feature = "ssr")]
pub mod ssr {
    use crate::app::shell;
    use crate::{AppError, AppResult};
    use axum::{
        body::Body as AxumBody,
        extract::{FromRef, State},
        http::Request,
        response::{IntoResponse, Response},
    };
    use common::{CurrentUser, DashboardData, ThemeMode};
    use leptos::config::LeptosOptions;
    use leptos::context::{provide_context, use_context};
    use leptos_axum::{handle_server_fns_with_context, AxumRouteListing};
    use std::env::VarError;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tracing::info;

    #[derive(Clone, FromRef)]
    pub struct AppState {
        pub leptos_options: LeptosOptions,
        pub routes: Vec<AxumRouteListing>,
        pub server_vars: ServerVars,
    }

    /// Identity, theme and dataset served to the dashboard.
    #[derive(Debug, Clone)]
    pub struct ServerVars {
        pub current_user: CurrentUser,
        pub default_theme: ThemeMode,
        pub dashboard_data: Arc<DashboardData>,
    }

    impl ServerVars {
        pub fn new(
            practitioner_name: Option<String>,
            default_theme: ThemeMode,
            dashboard_data: DashboardData,
        ) -> ServerVars {
            Self {
                current_user: CurrentUser {
                    name: practitioner_name,
                },
                default_theme,
                dashboard_data: Arc::new(dashboard_data),
            }
        }

        /// Reads `PRACTITIONER_NAME`, `DASHBOARD_THEME` and `DASHBOARD_DATA_PATH`.
        pub fn from_env() -> AppResult<ServerVars> {
            let practitioner_name = optional_var("PRACTITIONER_NAME")?;
            let default_theme = optional_var("DASHBOARD_THEME")?
                .map(|flag| ThemeMode::from_flag(&flag))
                .unwrap_or_default();
            let data_path = optional_var("DASHBOARD_DATA_PATH")?.map(PathBuf::from);
            let dashboard_data = DashboardData::load(data_path.as_deref())?;
            info!(
                practitioner = practitioner_name.as_deref().unwrap_or("<none>"),
                theme = %default_theme,
                data = data_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "sample".to_string()),
                "server vars loaded"
            );
            Ok(Self::new(practitioner_name, default_theme, dashboard_data))
        }
    }

    /// An unset variable is `None`; any other lookup failure is an error.
    pub fn optional_var(key: &str) -> AppResult<Option<String>> {
        match dotenvy::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn server_vars() -> AppResult<ServerVars> {
        use_context::<ServerVars>().ok_or(AppError::ServerVarsNotFound)
    }

    pub async fn server_fn_handler(
        State(app_state): State<AppState>,
        request: Request<AxumBody>,
    ) -> impl IntoResponse {
        handle_server_fns_with_context(
            move || {
                provide_context(app_state.server_vars.clone());
            },
            request,
        )
        .await
    }

    pub async fn leptos_routes_handler(
        state: State<AppState>,
        req: Request<AxumBody>,
    ) -> Response {
        let State(app_state) = state.clone();
        let options = app_state.leptos_options.clone();
        let handler = leptos_axum::render_route_with_context(
            app_state.routes.clone(),
            move || {
                provide_context(app_state.server_vars.clone());
            },
            move || shell(app_state.leptos_options.clone()),
        );
        handler(State(options), req).await.into_response()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn unset_variable_is_absent() {
            let value = optional_var("PRACTICE_DASHBOARD_TEST_UNSET").unwrap();
            assert_eq!(value, None);
        }

        #[test]
        fn set_variable_is_read() {
            // SAFETY: the variable name is unique to this test.
            unsafe { std::env::set_var("PRACTICE_DASHBOARD_TEST_NAME", "Lee") };
            let value = optional_var("PRACTICE_DASHBOARD_TEST_NAME").unwrap();
            assert_eq!(value.as_deref(), Some("Lee"));
        }

        #[cfg(unix)]
        #[test]
        fn non_unicode_variable_is_an_error() {
            use std::ffi::OsStr;
            use std::os::unix::ffi::OsStrExt;

            // SAFETY: the variable name is unique to this test.
            unsafe {
                std::env::set_var(
                    "PRACTICE_DASHBOARD_TEST_DATA_PATH",
                    OsStr::from_bytes(b"/nonexistent/\xff.json"),
                )
            };
            let err = optional_var("PRACTICE_DASHBOARD_TEST_DATA_PATH").unwrap_err();
            assert!(matches!(err, AppError::DotEnv(_)));
        }

        #[test]
        fn blank_config_serves_sample_data_in_light_mode() {
            let vars = ServerVars::new(None, ThemeMode::from_flag(""), DashboardData::default());
            assert_eq!(vars.current_user, CurrentUser::default());
            assert_eq!(vars.default_theme, ThemeMode::Light);
            assert_eq!(vars.dashboard_data.appointments.len(), 4);
        }

        #[test]
        fn server_vars_require_context() {
            let owner = leptos::prelude::Owner::new();
            owner.with(|| {
                assert!(matches!(server_vars(), Err(AppError::ServerVarsNotFound)));
                provide_context(ServerVars::new(
                    Some("Lee".to_string()),
                    ThemeMode::Dark,
                    DashboardData::default(),
                ));
                let vars = server_vars().unwrap();
                assert_eq!(vars.current_user, CurrentUser::named("Lee"));
                assert_eq!(vars.default_theme, ThemeMode::Dark);
            });
        }
    }
}
