use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn AttendanceFrame(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Attendance Management"</h1>
                    <p class="text-fg-muted">"Track and manage employee attendance records"</p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
