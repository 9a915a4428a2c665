use crate::{
    error::AttendanceError,
    pages::attendance::types::{AttendanceEntry, AttendanceRecord, SheetPeriod},
};
use chrono::NaiveDate;
use leptos::*;
use std::rc::Rc;

/// Append-only record collection. Each append returns a new collection that
/// shares every untouched record with the previous one.
#[derive(Debug, Clone, Default)]
pub struct AttendanceRecords {
    records: Vec<Rc<AttendanceRecord>>,
}

impl AttendanceRecords {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, employee_id: &str, date: NaiveDate) -> Option<&Rc<AttendanceRecord>> {
        self.records
            .iter()
            .find(|record| record.is_for(employee_id, date))
    }

    pub fn entries_on(&self, employee_id: &str, date: NaiveDate) -> &[AttendanceEntry] {
        self.find(employee_id, date)
            .map(|record| record.entries.as_slice())
            .unwrap_or(&[])
    }

    pub fn with_entry(&self, employee_id: &str, date: NaiveDate, entry: AttendanceEntry) -> Self {
        let mut appended = false;
        let mut records: Vec<Rc<AttendanceRecord>> = self
            .records
            .iter()
            .map(|record| {
                if record.is_for(employee_id, date) {
                    appended = true;
                    let mut entries = record.entries.clone();
                    entries.push(entry.clone());
                    Rc::new(AttendanceRecord {
                        employee_id: record.employee_id.clone(),
                        date,
                        entries,
                    })
                } else {
                    Rc::clone(record)
                }
            })
            .collect();
        if !appended {
            records.push(Rc::new(AttendanceRecord {
                employee_id: employee_id.to_string(),
                date,
                entries: vec![entry],
            }));
        }
        Self { records }
    }
}

/// The grid's store: records keyed against one sheet period.
#[derive(Debug, Clone)]
pub struct AttendanceSheet {
    pub period: SheetPeriod,
    pub records: AttendanceRecords,
}

impl AttendanceSheet {
    pub fn new(period: SheetPeriod) -> Self {
        Self {
            period,
            records: AttendanceRecords::default(),
        }
    }

    pub fn date_key(&self, day: u32) -> Result<String, AttendanceError> {
        self.period
            .date_for_day(day)
            .map(|date| date.format("%Y-%m-%d").to_string())
    }

    /// Entries for one cell; empty when nothing was marked or the day does
    /// not exist in the period.
    pub fn entries_for(&self, employee_id: &str, day: u32) -> &[AttendanceEntry] {
        match self.period.date_for_day(day) {
            Ok(date) => self.records.entries_on(employee_id, date),
            Err(_) => &[],
        }
    }

    pub fn appended(
        &self,
        employee_id: &str,
        day: u32,
        entry: AttendanceEntry,
    ) -> Result<Self, AttendanceError> {
        let date = self.period.date_for_day(day)?;
        Ok(Self {
            period: self.period,
            records: self.records.with_entry(employee_id, date, entry),
        })
    }
}

pub fn use_attendance_sheet(
    period: SheetPeriod,
) -> (ReadSignal<AttendanceSheet>, WriteSignal<AttendanceSheet>) {
    create_signal(AttendanceSheet::new(period))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::attendance::types::AttendanceKind;

    fn july() -> AttendanceSheet {
        AttendanceSheet::new(SheetPeriod::new(2025, 7))
    }

    fn kinds(entries: &[AttendanceEntry]) -> Vec<AttendanceKind> {
        entries.iter().map(|entry| entry.kind).collect()
    }

    #[test]
    fn lookup_on_empty_sheet_is_empty() {
        let sheet = july();
        assert!(sheet.entries_for("1", 5).is_empty());
        assert!(sheet.entries_for("unknown", 1).is_empty());
    }

    #[test]
    fn append_creates_record_for_new_key() {
        let sheet = july()
            .appended("1", 5, AttendanceEntry::new(AttendanceKind::Present))
            .unwrap();
        assert_eq!(kinds(sheet.entries_for("1", 5)), vec![AttendanceKind::Present]);
        assert!(sheet.entries_for("1", 6).is_empty());
        assert_eq!(sheet.records.len(), 1);
        let date = sheet.period.date_for_day(5).unwrap();
        assert_eq!(sheet.records.find("1", date).unwrap().date, date);
    }

    #[test]
    fn append_to_existing_key_extends_in_order() {
        let sheet = july()
            .appended("1", 5, AttendanceEntry::new(AttendanceKind::Present))
            .unwrap()
            .appended("1", 5, AttendanceEntry::new(AttendanceKind::Late))
            .unwrap();
        assert_eq!(
            kinds(sheet.entries_for("1", 5)),
            vec![AttendanceKind::Present, AttendanceKind::Late]
        );
        assert_eq!(sheet.records.len(), 1);
    }

    #[test]
    fn append_order_is_independent_of_unrelated_records() {
        let mut sheet = july();
        for (employee, day) in [("2", 1), ("3", 5), ("1", 6), ("4", 16)] {
            sheet = sheet
                .appended(employee, day, AttendanceEntry::new(AttendanceKind::Holiday))
                .unwrap();
        }
        let sheet = sheet
            .appended("1", 5, AttendanceEntry::new(AttendanceKind::Absent))
            .unwrap()
            .appended("1", 5, AttendanceEntry::new(AttendanceKind::Present))
            .unwrap();
        assert_eq!(
            kinds(sheet.entries_for("1", 5)),
            vec![AttendanceKind::Absent, AttendanceKind::Present]
        );
    }

    #[test]
    fn lookup_after_append_ends_with_new_entry() {
        let marked = AttendanceEntry::new(AttendanceKind::Late)
            .with_time("10:02:11")
            .with_notes("traffic");
        let sheet = july()
            .appended("2", 3, AttendanceEntry::new(AttendanceKind::Present))
            .unwrap()
            .appended("2", 3, marked.clone())
            .unwrap();
        assert_eq!(sheet.entries_for("2", 3).last(), Some(&marked));
    }

    #[test]
    fn append_leaves_other_keys_untouched_and_shared() {
        let before = july()
            .appended("1", 1, AttendanceEntry::new(AttendanceKind::Present))
            .unwrap()
            .appended("2", 1, AttendanceEntry::new(AttendanceKind::Absent))
            .unwrap();
        let after = before
            .appended("1", 1, AttendanceEntry::new(AttendanceKind::Late))
            .unwrap();

        assert_eq!(
            kinds(after.entries_for("2", 1)),
            vec![AttendanceKind::Absent]
        );
        let date = before.period.date_for_day(1).unwrap();
        assert!(Rc::ptr_eq(
            before.records.find("2", date).unwrap(),
            after.records.find("2", date).unwrap()
        ));
        assert!(!Rc::ptr_eq(
            before.records.find("1", date).unwrap(),
            after.records.find("1", date).unwrap()
        ));
        assert_eq!(kinds(before.entries_for("1", 1)), vec![AttendanceKind::Present]);
    }

    #[test]
    fn append_rejects_day_outside_period() {
        let sheet = AttendanceSheet::new(SheetPeriod::new(2025, 2));
        let err = sheet
            .appended("1", 30, AttendanceEntry::new(AttendanceKind::Present))
            .unwrap_err();
        assert!(matches!(err, AttendanceError::InvalidDate { day: 30, .. }));
        assert!(sheet.entries_for("1", 30).is_empty());
    }

    #[test]
    fn date_key_uses_sheet_period() {
        let sheet = july();
        assert_eq!(sheet.date_key(9).unwrap(), "2025-07-09");
    }
}
