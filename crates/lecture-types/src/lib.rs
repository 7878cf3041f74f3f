use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub mod order;
pub mod validate;

pub use order::{sort_upcoming, SortKey};
pub use validate::ValidationError;

/// Year used to place a filename's month-day on a calendar.
/// Leap year so that `2-29` is representable.
pub const REFERENCE_YEAR: i32 = 2000;

/// Name of the generated artifact, relative to the published site root
pub const ARTIFACT_FILENAME: &str = "lectures.json";

/// What a lecture link points at. Drives the button style on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Slides,
    Code,
    Signup,
    #[default]
    #[serde(other)]
    Other,
}

impl LinkKind {
    pub fn as_str(&self) -> &str {
        match self {
            LinkKind::Slides => "slides",
            LinkKind::Code => "code",
            LinkKind::Signup => "signup",
            LinkKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub kind: LinkKind,
}

/// One scheduled session, as stored in the lectures repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    #[serde(default)]
    pub filename: String, // e.g. "9-3-intro-to-react.json"
    pub date: String,     // ISO calendar date, "2025-09-03"
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LectureLink>,
}

/// Month and day parsed out of a lecture filename
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    /// Place this month-day in [`REFERENCE_YEAR`]. `None` for impossible
    /// combinations such as `13-1` or `4-31`.
    pub fn in_reference_year(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(REFERENCE_YEAR, self.month, self.day)
    }
}

fn filename_prefix() -> &'static Regex {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    PREFIX.get_or_init(|| Regex::new(r"^(\d+)-(\d+)-").expect("valid filename prefix pattern"))
}

impl Lecture {
    /// The `date` field as a calendar date, if it is valid ISO
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Month-day encoded in the leading `number-number-` of `filename`
    pub fn filename_month_day(&self) -> Option<MonthDay> {
        let caps = filename_prefix().captures(&self.filename)?;
        let month = caps.get(1)?.as_str().parse().ok()?;
        let day = caps.get(2)?.as_str().parse().ok()?;
        Some(MonthDay { month, day })
    }

    /// Card label for the date, e.g. "Wed, Sep 3, 2025".
    /// Falls back to the raw string when it does not parse.
    pub fn date_label(&self) -> String {
        match self.parsed_date() {
            Some(date) => date.format("%a, %b %-d, %Y").to_string(),
            None => self.date.clone(),
        }
    }

    /// True when the lecture happened before `today`.
    ///
    /// Compares ISO strings, not dates, so a malformed `date` still lands in
    /// exactly one group.
    pub fn is_previous(&self, today: NaiveDate) -> bool {
        is_previous_date(&self.date, today)
    }
}

/// True when an ISO `date` string sorts before `today`
pub fn is_previous_date(date: &str, today: NaiveDate) -> bool {
    date < today.format("%Y-%m-%d").to_string().as_str()
}

/// The generated artifact: lectures split into upcoming and previous
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureCollection {
    pub upcoming: Vec<Lecture>,
    pub previous: Vec<Lecture>,
}

impl LectureCollection {
    /// Split lectures by `date` against `today`, keeping listing order
    /// within each group
    pub fn partition(lectures: impl IntoIterator<Item = Lecture>, today: NaiveDate) -> Self {
        let mut collection = LectureCollection::default();
        for lecture in lectures {
            collection.push(lecture, today);
        }
        collection
    }

    pub fn push(&mut self, lecture: Lecture, today: NaiveDate) {
        if lecture.is_previous(today) {
            self.previous.push(lecture);
        } else {
            self.upcoming.push(lecture);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.previous.is_empty()
    }

    pub fn len(&self) -> usize {
        self.upcoming.len() + self.previous.len()
    }

    /// Pretty JSON, two-space indented, as published
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
