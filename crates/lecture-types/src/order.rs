//! Ordering of the upcoming lectures shown on the page.
//!
//! The `date` field decides the position. A lecture whose `date` does not
//! parse falls back to the month-day in its filename, placed in
//! [`REFERENCE_YEAR`](crate::REFERENCE_YEAR); those sort after every dated
//! lecture, among themselves by month-day. Lectures with neither go last.

use chrono::{Datelike, NaiveDate};

use crate::Lecture;

/// Where a lecture sorts. Variant order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Dated(NaiveDate),
    MonthDay(NaiveDate),
    Unkeyed,
}

impl SortKey {
    pub fn for_lecture(lecture: &Lecture) -> Self {
        let from_filename = lecture.filename_month_day();

        if let Some(date) = lecture.parsed_date() {
            if let Some(md) = from_filename {
                if md.month != date.month() || md.day != date.day() {
                    tracing::warn!(
                        "Lecture {} has date {} but its filename says {}-{}; ordering by date",
                        lecture.filename,
                        lecture.date,
                        md.month,
                        md.day
                    );
                }
            }
            return SortKey::Dated(date);
        }

        match from_filename.and_then(|md| md.in_reference_year()) {
            Some(date) => SortKey::MonthDay(date),
            None => SortKey::Unkeyed,
        }
    }
}

/// Sort upcoming lectures ascending. Stable, so ties and unkeyed lectures
/// keep the order they were delivered in.
pub fn sort_upcoming(lectures: &mut [Lecture]) {
    lectures.sort_by_cached_key(SortKey::for_lecture);
}
