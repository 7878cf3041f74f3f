//! Shape check for the generated `lectures.json` at the point it is read
//! back in (the page, or anything else consuming the artifact).

use serde_json::Value;
use thiserror::Error;

use crate::{Lecture, LectureCollection};

#[derive(Debug, Error)]
pub enum ValidationError {
    /// Not JSON at all
    #[error("Invalid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Expected a JSON object at the top level")]
    NotAnObject,

    #[error("Missing \"{0}\" group")]
    MissingGroup(&'static str),

    #[error("\"{0}\" is not an array")]
    NotAnArray(&'static str),

    /// An element of a group does not have the lecture shape
    #[error("{group}[{index}] is not a lecture: {source}")]
    InvalidLecture {
        group: &'static str,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl LectureCollection {
    /// Parse and validate an artifact body
    pub fn from_json(body: &str) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_str(body).map_err(ValidationError::Malformed)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        let Value::Object(mut map) = value else {
            return Err(ValidationError::NotAnObject);
        };

        let upcoming = take_group(&mut map, "upcoming")?;
        let previous = take_group(&mut map, "previous")?;

        Ok(LectureCollection { upcoming, previous })
    }
}

fn take_group(
    map: &mut serde_json::Map<String, Value>,
    group: &'static str,
) -> Result<Vec<Lecture>, ValidationError> {
    let items = match map.remove(group) {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ValidationError::NotAnArray(group)),
        None => return Err(ValidationError::MissingGroup(group)),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|source| ValidationError::InvalidLecture { group, index, source })
        })
        .collect()
}
