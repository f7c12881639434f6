//! Navigation history tracking.
//!
//! Provides immutable tracking of step changes over the lifetime of a
//! wizard, following functional programming principles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What caused a step change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Forward move through the validation gate
    Advance,
    /// One step back
    Retreat,
    /// Step indicator click or programmatic jump
    Jump,
}

/// Record of a single step change.
///
/// # Example
///
/// ```rust
/// use stepform::core::{StepTransition, Trigger};
/// use chrono::Utc;
///
/// let transition = StepTransition {
///     from: 0,
///     to: 1,
///     trigger: Trigger::Advance,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepTransition {
    /// Step index being left
    pub from: usize,
    /// Step index being entered
    pub to: usize,
    pub trigger: Trigger,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of step changes.
///
/// `record` returns a new history with the transition added and copies
/// every earlier transition, so each call costs time linear in the history
/// length. The controller owns its history and appends in place instead.
/// Nothing bounds the length; a wizard records one entry per step change.
///
/// # Example
///
/// ```rust
/// use stepform::core::{NavigationHistory, StepTransition, Trigger};
/// use chrono::Utc;
///
/// let history = NavigationHistory::new();
/// let history = history.record(StepTransition {
///     from: 0,
///     to: 1,
///     trigger: Trigger::Advance,
///     timestamp: Utc::now(),
/// });
/// let history = history.record(StepTransition {
///     from: 1,
///     to: 0,
///     trigger: Trigger::Retreat,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![0, 1, 0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationHistory {
    transitions: Vec<StepTransition>,
}

impl NavigationHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StepTransition) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Append a transition in place.
    pub(crate) fn push(&mut self, transition: StepTransition) {
        self.transitions.push(transition);
    }

    /// Step indices visited, starting with the first transition's origin.
    ///
    /// Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Time between the first and the last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    /// Count of transitions with the given trigger.
    pub fn count(&self, trigger: Trigger) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.trigger == trigger)
            .count()
    }

    pub fn transitions(&self) -> &[StepTransition] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
