pub mod admin;
pub mod doctor;
pub mod home;
pub mod login;
pub mod not_found;
pub mod patient;
pub mod role_page;

use dioxus::prelude::*;
use shared_types::Role;

use admin::AdminDashboard;
use doctor::DoctorDashboard;
use home::Home;
use login::Login;
use not_found::NotFound;
use patient::UserDashboard;

/// Application routes.
///
/// Dashboards have no guard: anyone who types `/admin` gets the admin page.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/admin")]
    AdminDashboard {},
    #[route("/doctor")]
    DoctorDashboard {},
    #[route("/user")]
    UserDashboard {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Dashboard the login form sends a role to.
pub fn dashboard_route(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminDashboard {},
        Role::Doctor => Route::DoctorDashboard {},
        Role::User => Route::UserDashboard {},
    }
}
