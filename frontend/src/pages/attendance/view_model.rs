use super::{
    interaction::MarkAttendance,
    repository::RosterRepository,
    types::{AttendanceEntry, Employee, SheetPeriod},
    utils::{export_file_name, filter_roster, sheet_to_csv, FilterState},
};
use crate::{
    config,
    error::AttendanceError,
    state::{
        attendance::{use_attendance_sheet, AttendanceSheet},
        notice::{use_notices, NoticeState},
    },
    utils::trigger_csv_download,
};
use leptos::*;
use log::{error, info, warn};

/// Owns the roster and the record store. The only write path into the
/// records is [`AttendanceGridViewModel::mark`].
#[derive(Clone, Copy)]
pub struct AttendanceGridViewModel {
    pub roster: StoredValue<Vec<Employee>>,
    pub sheet: ReadSignal<AttendanceSheet>,
    set_sheet: WriteSignal<AttendanceSheet>,
    pub search_term: RwSignal<String>,
    pub legend_open: RwSignal<bool>,
    pub display_days: u32,
}

impl AttendanceGridViewModel {
    pub fn new(repository: RosterRepository, period: SheetPeriod, display_days: u32) -> Self {
        let (sheet, set_sheet) = use_attendance_sheet(period);
        Self {
            roster: store_value(repository.employees()),
            sheet,
            set_sheet,
            search_term: create_rw_signal(String::new()),
            legend_open: create_rw_signal(false),
            display_days,
        }
    }

    pub fn period(&self) -> SheetPeriod {
        self.sheet.with_untracked(|sheet| sheet.period)
    }

    pub fn days(&self) -> Vec<u32> {
        self.period().day_columns(self.display_days)
    }

    pub fn filtered_employees(&self) -> Signal<Vec<Employee>> {
        let roster = self.roster;
        let search_term = self.search_term;
        Signal::derive(move || {
            search_term.with(|term| roster.with_value(|employees| filter_roster(employees, term)))
        })
    }

    pub fn entries_for(&self, employee_id: String, day: u32) -> Signal<Vec<AttendanceEntry>> {
        let sheet = self.sheet;
        Signal::derive(move || sheet.with(|s| s.entries_for(&employee_id, day).to_vec()))
    }

    pub fn mark(&self, command: MarkAttendance) -> Result<(), AttendanceError> {
        let (date_key, next) = self.sheet.with_untracked(|sheet| {
            Ok::<_, AttendanceError>((sheet.date_key(command.day)?, command.apply(sheet)?))
        })?;
        info!(
            "marked {} for employee {} on {} ({} records)",
            command.kind.label(),
            command.employee_id,
            date_key,
            next.records.len()
        );
        self.set_sheet.set(next);
        Ok(())
    }

    pub fn toggle_legend(&self) {
        self.legend_open.update(|open| *open = !*open);
    }

    pub fn export_csv(&self) {
        let employees = self.filtered_employees().get_untracked();
        let days = self.days();
        let (file_name, csv, unmarked) = self.sheet.with_untracked(|sheet| {
            (
                export_file_name(sheet),
                sheet_to_csv(&employees, &days, sheet),
                sheet.records.is_empty(),
            )
        });
        if unmarked {
            warn!("exporting {file_name} with no attendance marked");
        }
        match trigger_csv_download(&file_name, &csv) {
            Ok(()) => info!("exported {} rows to {}", employees.len(), file_name),
            Err(err) => error!("CSV export failed: {err}"),
        }
    }
}

pub fn use_attendance_grid_view_model() -> AttendanceGridViewModel {
    let cfg = config::current();
    let repository = use_context::<RosterRepository>().unwrap_or_default();
    AttendanceGridViewModel::new(repository, cfg.period(), cfg.display_days)
}

/// Filter selection owned by the page container.
#[derive(Clone, Copy)]
pub struct FilterViewModel {
    pub filters: RwSignal<FilterState>,
    notices: NoticeState,
}

impl FilterViewModel {
    pub fn new(notices: NoticeState) -> Self {
        Self {
            filters: create_rw_signal(FilterState::default()),
            notices,
        }
    }

    fn read(&self, read: impl Fn(&FilterState) -> String + 'static) -> Signal<String> {
        let filters = self.filters;
        Signal::derive(move || filters.with(|state| read(state)))
    }

    fn write(&self, write: impl Fn(&mut FilterState, String) + 'static) -> Callback<String> {
        let filters = self.filters;
        Callback::new(move |value: String| filters.update(|state| write(state, value)))
    }

    pub fn month(&self) -> Signal<String> {
        self.read(|state| state.month.clone())
    }

    pub fn year(&self) -> Signal<String> {
        self.read(|state| state.year.clone())
    }

    pub fn user_type(&self) -> Signal<String> {
        self.read(|state| state.user_type.clone())
    }

    pub fn society(&self) -> Signal<String> {
        self.read(|state| state.society.clone())
    }

    pub fn on_month_change(&self) -> Callback<String> {
        self.write(|state, value| state.month = value)
    }

    pub fn on_year_change(&self) -> Callback<String> {
        self.write(|state, value| state.year = value)
    }

    pub fn on_user_type_change(&self) -> Callback<String> {
        self.write(|state, value| state.user_type = value)
    }

    pub fn on_society_change(&self) -> Callback<String> {
        self.write(|state, value| state.society = value)
    }

    pub fn apply(&self) {
        self.notices.push(
            "Filters Applied",
            "Attendance data has been updated based on your filters.",
        );
    }

    pub fn reset(&self) {
        self.filters.update(|state| state.reset());
        self.notices.push(
            "Filters Reset",
            "All filters have been reset to default values.",
        );
    }
}

pub fn use_filter_view_model() -> FilterViewModel {
    FilterViewModel::new(use_notices())
}
