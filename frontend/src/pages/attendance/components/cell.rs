use super::{details_dialog::AttendanceDetailsDialog, mark_dialog::MarkAttendanceDialog};
use crate::{
    pages::attendance::{
        interaction::{CellDialog, CellEvent, CellState, MarkAttendance},
        types::{AttendanceEntry, AttendanceKind},
    },
    utils::time::current_entry_time,
};
use leptos::*;

/// Dialog state and mark dispatch for one (employee, day) cell.
#[derive(Clone, Copy)]
pub struct CellController {
    pub dialog: RwSignal<CellDialog>,
    pub cell: Signal<CellState>,
    employee_id: StoredValue<String>,
    day: u32,
    on_mark: Callback<MarkAttendance>,
}

impl CellController {
    pub fn new(
        employee_id: String,
        day: u32,
        entries: Signal<Vec<AttendanceEntry>>,
        on_mark: Callback<MarkAttendance>,
    ) -> Self {
        Self {
            dialog: create_rw_signal(CellDialog::default()),
            cell: Signal::derive(move || entries.with(|entries| CellState::from_entries(entries))),
            employee_id: store_value(employee_id),
            day,
            on_mark,
        }
    }

    pub fn send(&self, event: CellEvent) {
        let state = self.cell.get_untracked();
        self.dialog
            .update(|current| *current = current.next(event, &state));
    }

    pub fn showing(&self, target: CellDialog) -> Signal<bool> {
        let dialog = self.dialog;
        Signal::derive(move || dialog.get() == target)
    }

    /// Issues the mark for this cell, then closes the chooser.
    pub fn choose(&self, kind: AttendanceKind, notes: &str, time: String) {
        let command = MarkAttendance::new(self.employee_id.get_value(), self.day, kind)
            .at(time)
            .with_notes(notes);
        self.on_mark.call(command);
        self.send(CellEvent::Marked);
    }
}

/// One (employee, day) intersection. Owns only its dialog state; entries
/// come from the sheet and new marks go back out through `on_mark`.
#[component]
pub fn AttendanceCell(
    employee_id: String,
    day: u32,
    entries: Signal<Vec<AttendanceEntry>>,
    on_mark: Callback<MarkAttendance>,
) -> impl IntoView {
    let controller = CellController::new(employee_id, day, entries, on_mark);
    let cell = controller.cell;
    let send = move |event: CellEvent| controller.send(event);

    let on_choose = Callback::new(move |(kind, notes): (AttendanceKind, String)| {
        controller.choose(kind, &notes, current_entry_time());
    });
    let on_close = Callback::new(move |_| send(CellEvent::Dismiss));

    view! {
        <div class="flex items-center justify-center h-full">
            {move || match cell.get() {
                CellState::Empty => {
                    view! {
                        <button
                            type="button"
                            aria-label=format!("Mark attendance for day {day}")
                            class="w-8 h-8 rounded-full border border-border text-fg-muted hover:bg-surface-muted"
                            on:click=move |_| send(CellEvent::Open)
                        >
                            <i class="fas fa-plus text-xs" aria-hidden="true"></i>
                        </button>
                    }
                        .into_view()
                }
                CellState::Populated(entries) => {
                    view! {
                        <button
                            type="button"
                            aria-label=format!("Attendance details for day {day}")
                            class="flex flex-wrap justify-center cursor-pointer"
                            on:click=move |_| send(CellEvent::Open)
                        >
                            {entries
                                .iter()
                                .map(|entry| {
                                    view! {
                                        <span
                                            class=format!(
                                                "text-xs font-semibold mr-1 mb-1 px-1.5 rounded {}",
                                                entry.kind.badge_class(),
                                            )
                                            title=entry.kind.label()
                                        >
                                            {entry.kind.letter().to_string()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </button>
                    }
                        .into_view()
                }
            }}
            <MarkAttendanceDialog
                is_open=controller.showing(CellDialog::Chooser)
                day=day
                on_choose=on_choose
                on_close=on_close
            />
            <AttendanceDetailsDialog
                is_open=controller.showing(CellDialog::Details)
                day=day
                entries=entries
                on_add_entry=Callback::new(move |_| send(CellEvent::AddEntry))
                on_close=on_close
            />
        </div>
    }
}
