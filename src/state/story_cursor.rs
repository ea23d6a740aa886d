//! Position inside a story run and the display phase around each choice.

use crate::story::{ChoiceOutcome, ENTRY_NODE};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum StoryPhase {
    /// Waiting for the player to pick a choice.
    #[default]
    Choosing,
    /// Showing the consequence of a choice before moving on.
    Consequence(ChoiceOutcome),
    /// Run over; the ending banner is up until the navigator returns to the menu.
    Finished(ChoiceOutcome),
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoryCursor {
    pub node: i32,
    pub phase: StoryPhase,
}

impl Default for StoryCursor {
    fn default() -> Self {
        Self {
            node: ENTRY_NODE,
            phase: StoryPhase::Choosing,
        }
    }
}

impl StoryCursor {
    pub fn restart(&mut self) {
        *self = StoryCursor::default();
    }

    pub fn is_choosing(&self) -> bool {
        matches!(self.phase, StoryPhase::Choosing)
    }

    pub fn show_consequence(&mut self, outcome: ChoiceOutcome) {
        self.phase = StoryPhase::Consequence(outcome);
    }

    /// Leave the consequence phase: move to the next node, or finish the run.
    /// Returns false when there was no consequence on screen.
    pub fn advance(&mut self) -> bool {
        let StoryPhase::Consequence(outcome) = std::mem::take(&mut self.phase) else {
            return false;
        };
        if outcome.is_terminal {
            self.phase = StoryPhase::Finished(outcome);
        } else {
            self.node = outcome.next_node;
            self.phase = StoryPhase::Choosing;
        }
        true
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, StoryPhase::Finished(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(next: i32, terminal: bool) -> ChoiceOutcome {
        ChoiceOutcome {
            next_node: next,
            xp_reward: 0,
            score_reward: 0,
            flavor: "flavor".into(),
            is_terminal: terminal,
            ending: None,
        }
    }

    #[test]
    fn advance_moves_to_next_node() {
        let mut cursor = StoryCursor::default();
        cursor.show_consequence(outcome(4, false));
        assert!(!cursor.is_choosing());
        assert!(cursor.advance());
        assert_eq!(cursor.node, 4);
        assert!(cursor.is_choosing());
    }

    #[test]
    fn terminal_outcome_finishes_run() {
        let mut cursor = StoryCursor::default();
        cursor.show_consequence(outcome(13, true));
        assert!(cursor.advance());
        assert!(cursor.is_finished());
        assert_eq!(cursor.node, ENTRY_NODE);
    }

    #[test]
    fn advance_without_consequence_is_ignored() {
        let mut cursor = StoryCursor::default();
        assert!(!cursor.advance());
        assert!(cursor.is_choosing());
    }
}
