//! Dialogue state types for per-user session tracking.

use crate::catalog::Category;
use crate::user::UserId;
use serde::{Deserialize, Serialize};

/// Where a user currently is in a guided flow.
///
/// `Idle` is both the initial and the terminal state; every completed or
/// cancelled flow lands back in it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogueState {
    /// At the main menu, no flow in progress
    #[default]
    Idle,
    /// Logging a result: waiting for the exercise choice
    AwaitExerciseChoice,
    /// Logging a result: waiting for the set count
    AwaitSetCount,
    /// Logging a result: waiting for the weight
    AwaitWeight,
    /// Tracking water: waiting for the volume in ml
    AwaitHydrationVolume,
    /// Adding an exercise: waiting for the category choice
    AwaitNewExerciseCategory,
    /// Adding an exercise: waiting for the new name
    AwaitNewExerciseName,
    /// Saving a template: waiting for the template name
    AwaitTemplateName,
    /// Saving a template: waiting for the comma-separated exercise list
    AwaitTemplateExerciseList,
}

/// A partially built record, filled incrementally across states.
///
/// Cleared as a whole on commit or cancel; individual fields are never
/// reset in between.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingEntry {
    /// Chosen exercise name (set in `AwaitExerciseChoice`)
    pub exercise: Option<String>,
    /// Entered set count (set in `AwaitSetCount`)
    pub sets: Option<u32>,
    /// Chosen category (new-exercise flow, or derived from the catalog)
    pub category: Option<Category>,
    /// Entered template name (set in `AwaitTemplateName`)
    pub template_name: Option<String>,
    /// The free-text-exercise sentinel was chosen; the next message is
    /// accepted as a literal exercise name
    pub free_text: bool,
}

impl PendingEntry {
    /// Discards all partial input.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no partial input has been collected.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// In-memory dialogue progress for one user. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// The owning user
    pub user_id: UserId,
    /// Current dialogue state
    pub state: DialogueState,
    /// Partial input collected so far
    pub pending: PendingEntry,
}

impl UserSession {
    /// Creates a fresh session at the main menu.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            state: DialogueState::Idle,
            pending: PendingEntry::default(),
        }
    }

    /// Forces the session back to `Idle`, discarding partial input.
    ///
    /// Never fails, regardless of how malformed the pending entry is.
    pub fn reset(&mut self) {
        self.state = DialogueState::Idle;
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle_and_empty() {
        let session = UserSession::new(UserId::from("u1"));
        assert_eq!(session.state, DialogueState::Idle);
        assert!(session.pending.is_empty());
    }

    #[test]
    fn test_reset_discards_pending() {
        let mut session = UserSession::new(UserId::from("u1"));
        session.state = DialogueState::AwaitWeight;
        session.pending.exercise = Some("Squats".to_string());
        session.pending.sets = Some(3);

        session.reset();

        assert_eq!(session.state, DialogueState::Idle);
        assert!(session.pending.is_empty());
    }
}
