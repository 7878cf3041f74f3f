use async_trait::async_trait;
use chrono::NaiveDate;
use lecture_fetcher::{
    collect_lectures, encode_lecture, run, ContentResponse, FetchError, LectureSource,
    ListingEntry,
};
use lecture_types::{Lecture, LectureCollection};
use serde_json::{json, Value};
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

enum Stub {
    Lecture(Lecture),
    Json(Value),
    Raw(String),
    Status(u16),
}

/// In-memory listing; entries are served in order
struct StubSource {
    listing_status: Option<u16>,
    entries: Vec<(ListingEntry, Stub)>,
    content_calls: AtomicUsize,
}

impl StubSource {
    fn new(items: Vec<Stub>) -> Self {
        let entries = items
            .into_iter()
            .enumerate()
            .map(|(i, stub)| {
                let entry = ListingEntry {
                    url: format!("https://stub.invalid/contents/{}", i),
                    name: Some(format!("entry-{}", i)),
                };
                (entry, stub)
            })
            .collect();
        Self {
            listing_status: None,
            entries,
            content_calls: AtomicUsize::new(0),
        }
    }

    fn failing_listing(status: u16) -> Self {
        Self {
            listing_status: Some(status),
            ..Self::new(vec![])
        }
    }
}

fn status_error(url: &str, status: u16) -> FetchError {
    FetchError::Status {
        url: url.to_string(),
        status: reqwest::StatusCode::from_u16(status).unwrap(),
    }
}

#[async_trait]
impl LectureSource for StubSource {
    async fn list_entries(&self) -> Result<Vec<ListingEntry>, FetchError> {
        match self.listing_status {
            Some(status) => Err(status_error("https://stub.invalid/contents", status)),
            None => Ok(self.entries.iter().map(|(entry, _)| entry.clone()).collect()),
        }
    }

    async fn fetch_content(&self, entry: &ListingEntry) -> Result<ContentResponse, FetchError> {
        self.content_calls.fetch_add(1, Ordering::SeqCst);
        let (_, stub) = self
            .entries
            .iter()
            .find(|(e, _)| e == entry)
            .expect("entry came from the listing");
        match stub {
            Stub::Lecture(lecture) => Ok(ContentResponse {
                content: encode_lecture(lecture)?,
            }),
            Stub::Json(record) => Ok(ContentResponse {
                content: encode_lecture(record)?,
            }),
            Stub::Raw(content) => Ok(ContentResponse {
                content: content.clone(),
            }),
            Stub::Status(status) => Err(status_error(&entry.url, *status)),
        }
    }
}

fn lecture(filename: &str, date: &str, title: &str) -> Lecture {
    Lecture {
        filename: filename.to_string(),
        date: date.to_string(),
        title: title.to_string(),
        description: None,
        links: vec![],
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
}

#[tokio::test]
async fn test_lectures_split_by_date() {
    let source = StubSource::new(vec![
        Stub::Lecture(lecture("9-3-intro.json", "2025-09-03", "Intro")),
        Stub::Lecture(lecture("10-1-today.json", "2025-10-01", "Today")),
        Stub::Lecture(lecture("10-15-react.json", "2025-10-15", "React")),
        Stub::Lecture(lecture("9-30-css.json", "2025-09-30", "CSS")),
    ]);

    let collection = collect_lectures(&source, today()).await.unwrap();

    let titles = |group: &[Value]| {
        group.iter().map(|l| l["title"].as_str().unwrap().to_string()).collect::<Vec<_>>()
    };
    assert_eq!(titles(&collection.previous), vec!["Intro", "CSS"]);
    assert_eq!(titles(&collection.upcoming), vec!["Today", "React"]);
}

#[tokio::test]
async fn test_records_survive_the_trip_unchanged() {
    let mut original = lecture("10-15-react.json", "2025-10-15", "React hooks");
    original.description = Some("useState, useEffect and friends".to_string());
    let source = StubSource::new(vec![Stub::Lecture(original.clone())]);

    let collection = collect_lectures(&source, today()).await.unwrap();
    assert_eq!(collection.upcoming, vec![serde_json::to_value(&original).unwrap()]);
}

#[tokio::test]
async fn test_loose_records_are_published_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let no_filename = json!({"date": "2025-10-08", "title": "Git"});
    let link_without_kind = json!({
        "filename": "10-15-react.json",
        "date": "2025-10-15",
        "title": "React",
        "links": [{"label": "Repo", "href": "https://example.com/repo"}]
    });
    let extra_field = json!({
        "filename": "9-3-intro.json",
        "date": "2025-09-03",
        "title": "Intro",
        "location": "Room 101"
    });
    let source = StubSource::new(vec![
        Stub::Json(no_filename.clone()),
        Stub::Json(link_without_kind.clone()),
        Stub::Json(extra_field.clone()),
    ]);

    let path = run(&source, dir.path(), today()).await.unwrap();

    let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["upcoming"], json!([no_filename, link_without_kind]));
    assert_eq!(written["previous"], json!([extra_field]));

    // still readable by the page
    let collection = LectureCollection::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(collection.upcoming[0].filename, "");
    assert_eq!(collection.previous[0].title, "Intro");
}

#[tokio::test]
async fn test_empty_listing_writes_empty_groups() {
    let dir = tempfile::tempdir().unwrap();
    let source = StubSource::new(vec![]);

    let path = run(&source, dir.path(), today()).await.unwrap();

    let written = fs::read_to_string(path).unwrap();
    assert_eq!(written, "{\n  \"upcoming\": [],\n  \"previous\": []\n}");
}

#[tokio::test]
async fn test_failed_entry_leaves_existing_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = dir.path().join("lectures.json");
    fs::write(&artifact, "previously published").unwrap();

    let source = StubSource::new(vec![
        Stub::Lecture(lecture("9-3-intro.json", "2025-09-03", "Intro")),
        Stub::Status(502),
        Stub::Lecture(lecture("10-15-react.json", "2025-10-15", "React")),
    ]);

    let err = run(&source, dir.path(), today()).await.unwrap_err();

    assert!(matches!(err, FetchError::Entry { ref entry, .. } if entry == "entry-1"));
    assert_eq!(fs::read_to_string(&artifact).unwrap(), "previously published");
    // aborted on the failing entry, the third was never requested
    assert_eq!(source.content_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_failed_entry_writes_nothing_when_no_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("public");
    let source = StubSource::new(vec![Stub::Raw("%%% not base64".to_string())]);

    let err = run(&source, &out_dir, today()).await.unwrap_err();

    assert!(err.to_string().starts_with("entry-0: Invalid base64"));
    assert!(!out_dir.exists());
}

#[tokio::test]
async fn test_failed_listing_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let source = StubSource::failing_listing(404);

    let err = run(&source, dir.path(), today()).await.unwrap_err();

    assert!(matches!(
        err,
        FetchError::Status { status, .. } if status == reqwest::StatusCode::NOT_FOUND
    ));
    assert!(!dir.path().join("lectures.json").exists());
}

#[tokio::test]
async fn test_written_artifact_validates() {
    let dir = tempfile::tempdir().unwrap();
    let source = StubSource::new(vec![
        Stub::Lecture(lecture("9-3-intro.json", "2025-09-03", "Intro")),
        Stub::Lecture(lecture("10-15-react.json", "2025-10-15", "React")),
    ]);

    let path = run(&source, dir.path(), today()).await.unwrap();

    let collection = LectureCollection::from_json(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(collection.upcoming.len(), 1);
    assert_eq!(collection.previous.len(), 1);
}
