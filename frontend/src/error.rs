use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttendanceError {
    #[error("day {day} is not a valid date in {year:04}-{month:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("unknown time zone '{0}'")]
    InvalidTimeZone(String),
    #[error("failed to load runtime config: {0}")]
    Config(String),
    #[error("failed to download file: {0}")]
    Download(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_message_pads_period() {
        let err = AttendanceError::InvalidDate {
            year: 2025,
            month: 2,
            day: 30,
        };
        assert_eq!(err.to_string(), "day 30 is not a valid date in 2025-02");
    }
}
