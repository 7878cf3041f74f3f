use chrono::NaiveDate;
use lecture_types::{is_previous_date, ARTIFACT_FILENAME};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::decode_lecture;
use crate::error::FetchError;
use crate::source::LectureSource;

/// Records as retrieved, split against the run date. Each record is
/// written back exactly as it was decoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchedLectures {
    pub upcoming: Vec<Value>,
    pub previous: Vec<Value>,
}

impl FetchedLectures {
    /// File a record under `previous` when its `date` string sorts before
    /// `today`. A record without a string `date` stays upcoming.
    pub fn push(&mut self, record: Value, today: NaiveDate) {
        let previous = record
            .get("date")
            .and_then(Value::as_str)
            .is_some_and(|date| is_previous_date(date, today));
        if previous {
            self.previous.push(record);
        } else {
            self.upcoming.push(record);
        }
    }

    pub fn len(&self) -> usize {
        self.upcoming.len() + self.previous.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.previous.is_empty()
    }

    /// Pretty JSON, two-space indented, as published
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Pull every listed lecture and split it against `today`.
///
/// Entries are fetched one after another. The first failure aborts the
/// whole collection.
pub async fn collect_lectures(
    source: &dyn LectureSource,
    today: NaiveDate,
) -> Result<FetchedLectures, FetchError> {
    let entries = source.list_entries().await?;
    tracing::info!("[lectures] Listing returned {} entries", entries.len());

    let mut collection = FetchedLectures::default();
    for entry in &entries {
        let response = source
            .fetch_content(entry)
            .await
            .map_err(|e| e.for_entry(entry.label()))?;
        let record = decode_lecture(&response.content).map_err(|e| e.for_entry(entry.label()))?;

        tracing::debug!(
            "[lectures] {} -> {} ({})",
            entry.label(),
            record.get("title").and_then(serde_json::Value::as_str).unwrap_or("untitled"),
            record.get("date").and_then(serde_json::Value::as_str).unwrap_or("no date")
        );
        collection.push(record, today);
    }

    Ok(collection)
}

/// Write the artifact into `out_dir`, replacing any previous one.
///
/// The JSON goes to a temporary sibling first and is renamed into place, so
/// readers never see a half-written file.
pub fn write_collection(
    out_dir: &Path,
    collection: &FetchedLectures,
) -> Result<PathBuf, FetchError> {
    fs::create_dir_all(out_dir).map_err(|e| FetchError::io(out_dir, e))?;

    let json = collection.to_pretty_json()?;
    let out_path = out_dir.join(ARTIFACT_FILENAME);
    let tmp_path = out_dir.join(format!(".{}.tmp", ARTIFACT_FILENAME));

    fs::write(&tmp_path, json).map_err(|e| FetchError::io(&tmp_path, e))?;
    if let Err(e) = fs::rename(&tmp_path, &out_path) {
        fs::remove_file(&tmp_path).ok();
        return Err(FetchError::io(&out_path, e));
    }

    Ok(out_path)
}

/// Fetch, classify and publish. Nothing is written unless every entry
/// was retrieved and decoded.
pub async fn run(
    source: &dyn LectureSource,
    out_dir: &Path,
    today: NaiveDate,
) -> Result<PathBuf, FetchError> {
    let collection = collect_lectures(source, today).await?;
    tracing::info!(
        "[lectures] {} upcoming, {} previous",
        collection.upcoming.len(),
        collection.previous.len()
    );
    write_collection(out_dir, &collection)
}
