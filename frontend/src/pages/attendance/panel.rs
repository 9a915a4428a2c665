use super::{
    components::{filters::FilterPanel, grid::AttendanceGrid},
    layout::AttendanceFrame,
    view_model::{use_attendance_grid_view_model, use_filter_view_model},
};
use leptos::*;

#[component]
pub fn AttendanceManagementPage() -> impl IntoView {
    view! { <AttendancePanel/> }
}

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let filters = use_filter_view_model();
    let grid = use_attendance_grid_view_model();

    view! {
        <AttendanceFrame>
            <FilterPanel
                month=filters.month()
                year=filters.year()
                user_type=filters.user_type()
                society=filters.society()
                on_month_change=filters.on_month_change()
                on_year_change=filters.on_year_change()
                on_user_type_change=filters.on_user_type_change()
                on_society_change=filters.on_society_change()
                on_apply=Callback::new(move |_| filters.apply())
                on_reset=Callback::new(move |_| filters.reset())
            />
            <AttendanceGrid vm=grid/>
        </AttendanceFrame>
    }
}
