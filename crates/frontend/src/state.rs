//! Lecture section state. One reducer owns it; the only trigger is the
//! completion of the page-load fetch.

use std::cell::Cell;
use std::rc::Rc;

use lecture_types::{sort_upcoming, Lecture, LectureCollection};
use yew::Reducible;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LecturesState {
    #[default]
    Loading,
    Loaded(LectureCollection),
    /// Fetch or validation failed. Rendered like an empty collection.
    Unavailable,
}

#[derive(Debug)]
pub enum LecturesAction {
    Loaded(LectureCollection),
    Failed(String),
}

impl LecturesAction {
    /// Turn an HTTP status and body into the matching transition
    pub fn from_response(status: u16, body: &str) -> Self {
        if !(200..300).contains(&status) {
            return LecturesAction::Failed(format!("HTTP error: {}", status));
        }
        match LectureCollection::from_json(body) {
            Ok(collection) => LecturesAction::Loaded(collection),
            Err(e) => LecturesAction::Failed(e.to_string()),
        }
    }
}

impl Reducible for LecturesState {
    type Action = LecturesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LecturesAction::Loaded(mut collection) => {
                sort_upcoming(&mut collection.upcoming);
                Rc::new(LecturesState::Loaded(collection))
            }
            LecturesAction::Failed(reason) => {
                tracing::warn!("Lectures unavailable: {}", reason);
                Rc::new(LecturesState::Unavailable)
            }
        }
    }
}

/// Shared by a fetch and the effect cleanup that may outlive it. Once
/// cancelled, a late response is dropped instead of dispatched.
#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    cancelled: Rc<Cell<bool>>,
}

impl FetchGuard {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Pass `action` to `dispatch` unless the guard was cancelled.
    /// Returns whether it was delivered.
    pub fn deliver(self, action: LecturesAction, dispatch: impl FnOnce(LecturesAction)) -> bool {
        if self.is_cancelled() {
            tracing::debug!("Dropping lectures response for unmounted section");
            return false;
        }
        dispatch(action);
        true
    }
}

impl LecturesState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LecturesState::Loading)
    }

    pub fn upcoming(&self) -> &[Lecture] {
        match self {
            LecturesState::Loaded(collection) => &collection.upcoming,
            _ => &[],
        }
    }

    /// Previous lectures in the order the artifact lists them
    pub fn previous(&self) -> &[Lecture] {
        match self {
            LecturesState::Loaded(collection) => &collection.previous,
            _ => &[],
        }
    }
}
