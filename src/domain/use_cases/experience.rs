use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    constants::{DURATION_SEPARATOR, MONTH_NAMES, PRESENT_MARKER},
    entities::experience::ExperienceRecord,
    errors::DurationParseError,
};

/// Resolves a full English month name (any case) to its zero-based ordinal.
pub fn month_index(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|month| month.eq_ignore_ascii_case(name))
        .map(|idx| idx as u32)
}

/// Extracts the end date of a `"MONTH YEAR - MONTH YEAR"` duration.
///
/// An end segment containing `PRESENT` (any case) resolves to `now`;
/// any other end segment resolves to midnight on the first of that month.
pub fn parse_end_date(
    duration: &str,
    now: NaiveDateTime,
) -> Result<NaiveDateTime, DurationParseError> {
    let segment = duration
        .split(DURATION_SEPARATOR)
        .nth(1)
        .ok_or_else(|| DurationParseError::MissingSeparator {
            duration: duration.to_string(),
        })?;

    if segment.to_uppercase().contains(PRESENT_MARKER) {
        return Ok(now);
    }

    let segment = segment.trim();
    let (month, year) = segment
        .split_once(' ')
        .ok_or_else(|| DurationParseError::MalformedEndDate {
            segment: segment.to_string(),
        })?;

    let month0 = month_index(month).ok_or_else(|| DurationParseError::UnknownMonth {
        month: month.to_string(),
        segment: segment.to_string(),
    })?;

    let invalid_year = || DurationParseError::InvalidYear {
        year: year.to_string(),
        segment: segment.to_string(),
    };
    let year: i32 = year.trim().parse().map_err(|_| invalid_year())?;

    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .map(|date| date.and_time(NaiveTime::MIN))
        .ok_or_else(invalid_year)
}

/// Orders experiences by end date, most recent first, using the current local time
/// for `PRESENT` entries.
pub fn sort_experiences(
    records: &[ExperienceRecord],
) -> Result<Vec<ExperienceRecord>, DurationParseError> {
    sort_experiences_at(records, Local::now().naive_local())
}

/// Same as [`sort_experiences`] with an explicit "now".
///
/// Every duration is parsed before anything is reordered, so a malformed entry
/// fails the whole call. Equal end dates keep their input order.
pub fn sort_experiences_at(
    records: &[ExperienceRecord],
    now: NaiveDateTime,
) -> Result<Vec<ExperienceRecord>, DurationParseError> {
    let mut keyed = records
        .iter()
        .map(|record| parse_end_date(&record.duration, now).map(|end| (end, record)))
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by(|(a, _), (b, _)| b.cmp(a));

    Ok(keyed.into_iter().map(|(_, record)| record.clone()).collect())
}
