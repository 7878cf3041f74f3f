//! Build-time fetcher for the lecture list.
//!
//! Reads every lecture record from the remote listing, splits them into
//! upcoming and previous against today's date and publishes the result as
//! `lectures.json` for the site to load.

pub mod codec;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod source;

pub use codec::{decode_lecture, encode_lecture};
pub use config::FetcherConfig;
pub use error::FetchError;
pub use pipeline::{collect_lectures, run, write_collection, FetchedLectures};
pub use source::{ContentResponse, GithubSource, LectureSource, ListingEntry};
