//! Server functions standing in for the identity and theme providers and the
//! practice data backend.

use crate::ServerFnResult;
use common::{CurrentUser, DashboardData, ThemeMode};
use leptos::server;

#[server]
pub async fn get_current_user() -> ServerFnResult<CurrentUser> {
    let server_vars = crate::ssr::server_vars()?;
    Ok(server_vars.current_user)
}

#[server]
pub async fn get_default_theme() -> ServerFnResult<ThemeMode> {
    let server_vars = crate::ssr::server_vars()?;
    Ok(server_vars.default_theme)
}

#[server]
pub async fn get_dashboard_data() -> ServerFnResult<DashboardData> {
    let server_vars = crate::ssr::server_vars()?;
    Ok(server_vars.dashboard_data.as_ref().clone())
}
