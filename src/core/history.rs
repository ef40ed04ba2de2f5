//! Phase transition history.
//!
//! A bounded, append-only log of the phase changes the calculator went
//! through. It exists for diagnostics; nothing can be restored from it.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Default number of transitions kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// The operation that caused a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    Append,
    ChooseOperation,
    Compute,
    Delete,
    Reset,
}

impl Trigger {
    /// Get the operation's snake_case name for logging.
    pub fn name(self) -> &'static str {
        match self {
            Trigger::Append => "append",
            Trigger::ChooseOperation => "choose_operation",
            Trigger::Compute => "compute",
            Trigger::Delete => "delete",
            Trigger::Reset => "reset",
        }
    }
}

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use tally::core::{Phase, StateTransition, Trigger};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Phase::Empty,
///     to: Phase::FirstOperand,
///     trigger: Trigger::Append,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.trigger.name(), "append");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The operation that caused the move
    pub trigger: Trigger,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded history of state transitions.
///
/// `record` returns a new history with the transition added and the oldest
/// entries dropped beyond the limit; the original is left untouched.
///
/// # Example
///
/// ```rust
/// use tally::core::{Phase, StateHistory, StateTransition, Trigger};
/// use chrono::Utc;
///
/// let history = StateHistory::with_limit(8);
///
/// let history = history.record(StateTransition {
///     from: Phase::Empty,
///     to: Phase::FirstOperand,
///     trigger: Trigger::Append,
///     timestamp: Utc::now(),
/// });
/// let history = history.record(StateTransition {
///     from: Phase::FirstOperand,
///     to: Phase::OperatorPending,
///     trigger: Trigger::ChooseOperation,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Phase::Empty, &Phase::FirstOperand, &Phase::OperatorPending]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    limit: usize,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history with the default limit.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a new empty history keeping at most `limit` transitions.
    ///
    /// A limit of zero is raised to one.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The kept transitions are copied, so this costs O(limit).
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        if transitions.len() >= self.limit {
            transitions.pop_front();
        }
        transitions.push_back(transition);
        Self {
            transitions,
            limit: self.limit,
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest kept transition, then the `to`
    /// state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the oldest and newest kept transitions.
    ///
    /// `None` when the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Iterate over kept transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions.iter()
    }

    /// Get the most recent transition.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    /// Number of transitions kept.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Check if no transition has been kept.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Maximum number of transitions kept.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;

    fn transition(from: Phase, to: Phase, trigger: Trigger) -> StateTransition<Phase> {
        StateTransition {
            from,
            to,
            trigger,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Phase> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert_eq!(history.limit(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history =
            history.record(transition(Phase::Empty, Phase::FirstOperand, Trigger::Append));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(transition(Phase::Empty, Phase::FirstOperand, Trigger::Append))
            .record(transition(
                Phase::FirstOperand,
                Phase::OperatorPending,
                Trigger::ChooseOperation,
            ))
            .record(transition(
                Phase::OperatorPending,
                Phase::SecondOperand,
                Trigger::Append,
            ));

        let path = history.get_path();
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], &Phase::Empty);
        assert_eq!(path[3], &Phase::SecondOperand);
    }

    #[test]
    fn limit_drops_oldest_transitions() {
        let history = StateHistory::with_limit(2)
            .record(transition(Phase::Empty, Phase::FirstOperand, Trigger::Append))
            .record(transition(
                Phase::FirstOperand,
                Phase::OperatorPending,
                Trigger::ChooseOperation,
            ))
            .record(transition(
                Phase::OperatorPending,
                Phase::FirstOperand,
                Trigger::Delete,
            ));

        assert_eq!(history.len(), 2);
        let triggers: Vec<Trigger> = history.transitions().map(|t| t.trigger).collect();
        assert_eq!(triggers, vec![Trigger::ChooseOperation, Trigger::Delete]);
        assert_eq!(history.get_path()[0], &Phase::FirstOperand);
    }

    #[test]
    fn zero_limit_keeps_one_transition() {
        let history = StateHistory::with_limit(0)
            .record(transition(Phase::Empty, Phase::FirstOperand, Trigger::Append))
            .record(transition(Phase::FirstOperand, Phase::Empty, Trigger::Reset));

        assert_eq!(history.limit(), 1);
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().map(|t| t.trigger), Some(Trigger::Reset));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history =
            StateHistory::new().record(transition(Phase::Empty, Phase::FirstOperand, Trigger::Append));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history =
            StateHistory::new().record(transition(Phase::Empty, Phase::FirstOperand, Trigger::Append));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<Phase> = serde_json::from_str(&json).unwrap();

        assert_eq!(history.len(), deserialized.len());
        assert_eq!(deserialized.limit(), history.limit());
    }
}
