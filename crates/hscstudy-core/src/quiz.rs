//! Multiple-choice quiz state.
//!
//! Each question is a [`QuestionGroup`] with two states, `Unanswered` and
//! `Answered`. Selecting an option always moves the group to `Answered` with
//! only the latest selection reflected in its marks:
//!
//! - the option at the correct index is marked [`OptionMark::Correct`]
//! - a selected option other than the correct one is marked
//!   [`OptionMark::Incorrect`]
//!
//! [`Quiz::score`] recomputes from the current selections every time it is
//! called.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::StudyError;
use crate::types::McqQuestion;

/// Number of options in every question
pub const OPTION_COUNT: usize = 4;

/// Visual mark carried by an option after a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Correct,
    Incorrect,
}

impl OptionMark {
    /// CSS class for the mark
    pub fn class(&self) -> &'static str {
        match self {
            OptionMark::Correct => "correct",
            OptionMark::Incorrect => "incorrect",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupState {
    #[default]
    Unanswered,
    Answered {
        selected: usize,
    },
}

/// Answer state for one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionGroup {
    correct: usize,
    state: GroupState,
}

impl QuestionGroup {
    pub fn new(correct: usize) -> Self {
        Self {
            correct,
            state: GroupState::default(),
        }
    }

    pub fn state(&self) -> GroupState {
        self.state
    }

    pub fn correct_index(&self) -> usize {
        self.correct
    }

    /// Select an option, replacing any earlier selection.
    ///
    /// Returns `false` (and leaves the group unchanged) for an index outside
    /// the four options.
    pub fn select(&mut self, option: usize) -> bool {
        if option >= OPTION_COUNT {
            return false;
        }
        self.state = GroupState::Answered { selected: option };
        true
    }

    /// Mark currently shown on `option`
    pub fn mark(&self, option: usize) -> Option<OptionMark> {
        let GroupState::Answered { selected } = self.state else {
            return None;
        };
        if option == self.correct {
            Some(OptionMark::Correct)
        } else if option == selected {
            Some(OptionMark::Incorrect)
        } else {
            None
        }
    }

    /// Marks for all four options, in option order
    pub fn marks(&self) -> [Option<OptionMark>; OPTION_COUNT] {
        std::array::from_fn(|option| self.mark(option))
    }

    /// Whether the current selection is the correct option
    pub fn is_correct(&self) -> bool {
        matches!(self.state, GroupState::Answered { selected } if selected == self.correct)
    }
}

/// Result of scoring a quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// Answer state for every question of an item
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Quiz {
    groups: Vec<QuestionGroup>,
}

impl Quiz {
    pub fn new(questions: &[McqQuestion]) -> Self {
        Self {
            groups: questions
                .iter()
                .map(|q| QuestionGroup::new(q.correct))
                .collect(),
        }
    }

    pub fn groups(&self) -> &[QuestionGroup] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&QuestionGroup> {
        self.groups.get(index)
    }

    /// Option-selected callback. Out-of-range indices are ignored.
    pub fn select(&mut self, group: usize, option: usize) -> bool {
        let applied = self
            .groups
            .get_mut(group)
            .is_some_and(|g| g.select(option));
        if applied {
            debug!(group, option, "quiz option selected");
        }
        applied
    }

    /// Score-requested callback. Unanswered groups count as wrong.
    pub fn score(&self) -> Score {
        Score {
            correct: self.groups.iter().filter(|g| g.is_correct()).count(),
            total: self.groups.len(),
        }
    }
}

/// A selection written as `Q=O`: 1-based question number, 0-based option index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    /// 0-based question group
    pub group: usize,
    pub option: usize,
}

impl FromStr for Answer {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StudyError::InvalidAnswer(s.to_string());
        let (question, option) = s.split_once('=').ok_or_else(invalid)?;
        let question: usize = question.trim().parse().map_err(|_| invalid())?;
        let option: usize = option.trim().parse().map_err(|_| invalid())?;
        if question == 0 {
            return Err(invalid());
        }
        Ok(Self {
            group: question - 1,
            option,
        })
    }
}
