use super::{cell::AttendanceCell, legend::AttendanceLegend};
use crate::{
    components::{
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
    },
    pages::attendance::{
        interaction::MarkAttendance, types::Employee, view_model::AttendanceGridViewModel,
    },
};
use leptos::*;
use log::error;

/// Roster rows against day columns. The employee column stays pinned while
/// the day columns scroll horizontally.
#[component]
pub fn AttendanceGrid(vm: AttendanceGridViewModel) -> impl IntoView {
    let employees = vm.filtered_employees();
    let days = store_value(vm.days());
    let period = vm.period();
    let legend_open = vm.legend_open;
    let search_term = vm.search_term;

    let on_mark = Callback::new(move |command: MarkAttendance| {
        if let Err(err) = vm.mark(command) {
            error!("failed to mark attendance: {err}");
        }
    });

    view! {
        <section class="bg-surface-elevated border border-border rounded-lg">
            <div class="flex flex-wrap items-center justify-between gap-3 p-4 border-b border-border">
                <div>
                    <h2 class="text-lg font-semibold text-fg">"Attendance Sheet"</h2>
                    <p class="text-sm text-fg-muted">
                        {format!("{} {}", period.month_name(), period.year)}
                    </p>
                </div>
                <div class="flex items-center gap-2">
                    <Button
                        variant=ButtonVariant::Outline
                        on_click=Callback::new(move |_| vm.toggle_legend())
                        attr:aria-expanded=move || legend_open.get().to_string()
                    >
                        <i class="fas fa-info-circle mr-2" aria-hidden="true"></i>
                        "Legend"
                    </Button>
                    <Button on_click=Callback::new(move |_| vm.export_csv())>
                        <i class="fas fa-download mr-2" aria-hidden="true"></i>
                        "Export CSV"
                    </Button>
                </div>
            </div>
            <Show when=move || legend_open.get()>
                <AttendanceLegend/>
            </Show>
            <div class="p-4 border-b border-border">
                <input
                    type="search"
                    aria-label="Search employees"
                    placeholder="Search employees..."
                    class="w-full md:w-80 rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                    prop:value=move || search_term.get()
                    on:input=move |ev| search_term.set(event_target_value(&ev))
                />
            </div>
            <Show
                when=move || employees.with(|rows| !rows.is_empty())
                fallback=|| {
                    view! {
                        <div class="p-4">
                            <EmptyState
                                title="No employees found"
                                description="No employee name matches the search term."
                                icon_class="fas fa-search"
                            />
                        </div>
                    }
                }
            >
                <div class="overflow-x-auto">
                    <table class="min-w-full border-collapse text-sm">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th
                                    scope="col"
                                    class="sticky left-0 z-10 bg-surface-muted w-64 px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider border-r border-border"
                                >
                                    "Employee"
                                </th>
                                {days
                                    .get_value()
                                    .into_iter()
                                    .map(|day| {
                                        view! {
                                            <th
                                                scope="col"
                                                class="w-16 px-2 py-3 text-center text-xs font-medium text-fg-muted border-r border-border"
                                            >
                                                {day}
                                            </th>
                                        }
                                    })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || employees.get()
                                key=|employee| employee.id.clone()
                                children=move |employee: Employee| {
                                    let cells = days
                                        .get_value()
                                        .into_iter()
                                        .map(|day| {
                                            let entries = vm.entries_for(employee.id.clone(), day);
                                            view! {
                                                <td class="h-16 w-16 px-1 border-r border-t border-border">
                                                    <AttendanceCell
                                                        employee_id=employee.id.clone()
                                                        day=day
                                                        entries=entries
                                                        on_mark=on_mark
                                                    />
                                                </td>
                                            }
                                        })
                                        .collect_view();
                                    view! {
                                        <tr>
                                            <EmployeeCell employee=employee/>
                                            {cells}
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn EmployeeCell(employee: Employee) -> impl IntoView {
    view! {
        <th
            scope="row"
            class="sticky left-0 z-10 bg-surface-elevated px-4 py-3 text-left font-normal border-r border-t border-border"
        >
            <div class="flex items-center gap-3">
                <span class=format!(
                    "inline-flex w-8 h-8 items-center justify-center rounded-full text-xs font-semibold text-white {}",
                    employee.avatar_color,
                )>{employee.initials}</span>
                <div>
                    <p class="text-sm font-medium text-fg">{employee.name}</p>
                    <p class="text-xs text-fg-muted">{employee.role.label()}</p>
                </div>
            </div>
        </th>
    }
}
