use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    pages::attendance::{repository::RosterRepository, AttendanceManagementPage},
    state::notice::provide_notices,
};

pub const HOME_PATH: &str = "/";
pub const ATTENDANCE_PATH: &str = "/attendance";

#[cfg(test)]
const ROUTE_PATHS: &[&str] = &[HOME_PATH, ATTENDANCE_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_notices();
    provide_context(RosterRepository::new());
    view! {
        <Title text="Attendance Sheet"/>
        <Router>
            <Routes>
                <Route path=HOME_PATH view=AttendanceManagementPage/>
                <Route path=ATTENDANCE_PATH view=AttendanceManagementPage/>
            </Routes>
        </Router>
    }
}
