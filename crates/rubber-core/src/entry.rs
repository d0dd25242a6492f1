//! The code-entry state machine.

use crate::{Cue, Feedback, InputSymbol, Message, SolutionTable};

/// Result of checking a submitted code.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SubmitOutcome {
    /// The code is a solution.
    Matched {
        /// The submitted code.
        code: String,
        /// The clue stored for the code.
        clue: String,
    },
    /// The code matched no solution.
    Rejected {
        /// The submitted code.
        code: String,
    },
}

impl SubmitOutcome {
    /// Returns the code that was submitted.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Matched { code, .. } | Self::Rejected { code } => code,
        }
    }
}

/// What a single [`InputSymbol`] did to a [`CodeEntry`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Transition {
    /// A digit was appended to the current code.
    Appended,
    /// The current code was discarded.
    Cleared,
    /// The current code was checked and discarded.
    Submitted(SubmitOutcome),
}

impl Transition {
    /// Returns the cue to play for this transition, if any.
    #[must_use]
    pub fn cue(&self) -> Option<Cue> {
        match self {
            Self::Appended => Some(Cue::Beep),
            Self::Cleared => None,
            Self::Submitted(SubmitOutcome::Matched { .. }) => Some(Cue::Success),
            Self::Submitted(SubmitOutcome::Rejected { .. }) => Some(Cue::Error),
        }
    }

    /// Returns the message to present for this transition, if any.
    #[must_use]
    pub fn message(&self) -> Option<Message> {
        match self {
            Self::Submitted(SubmitOutcome::Matched { clue, .. }) => {
                Some(Message::solved(clue.as_str()))
            }
            _ => None,
        }
    }
}

/// Accumulates keypad digits and checks submitted codes.
///
/// The machine has a single state holding the current code. Digits are
/// appended verbatim; [`InputSymbol::Clear`] empties the code; and
/// [`InputSymbol::Submit`] looks the code up and empties it whatever the
/// outcome.
///
/// The code length is not bounded. Nothing is truncated before lookup.
///
/// # Examples
///
/// ```
/// use rubber_core::{CodeEntry, InputSymbol, SolutionTable, SubmitOutcome, Transition};
///
/// let mut entry = CodeEntry::new(SolutionTable::builtin());
/// entry.apply(InputSymbol::digit("9"));
/// entry.apply(InputSymbol::digit("9"));
/// assert_eq!(entry.current_code(), "99");
///
/// let transition = entry.apply(InputSymbol::Submit);
/// assert_eq!(
///     transition,
///     Transition::Submitted(SubmitOutcome::Rejected { code: "99".to_owned() })
/// );
/// assert_eq!(entry.current_code(), "");
/// ```
#[derive(Debug, Clone)]
pub struct CodeEntry {
    solutions: SolutionTable,
    code: String,
}

impl CodeEntry {
    /// Creates a state machine with an empty code.
    #[must_use]
    pub fn new(solutions: SolutionTable) -> Self {
        Self {
            solutions,
            code: String::new(),
        }
    }

    /// Returns the digits entered since the last clear or submit.
    #[must_use]
    pub fn current_code(&self) -> &str {
        &self.code
    }

    /// Returns the solution table codes are checked against.
    #[must_use]
    pub fn solutions(&self) -> &SolutionTable {
        &self.solutions
    }

    /// Applies one symbol and returns what happened.
    pub fn apply(&mut self, symbol: InputSymbol) -> Transition {
        match symbol {
            InputSymbol::Digit(value) => {
                log::trace!("append digit: {value:?}");
                self.code.push_str(&value);
                Transition::Appended
            }
            InputSymbol::Clear => {
                self.code.clear();
                Transition::Cleared
            }
            InputSymbol::Submit => Transition::Submitted(self.try_code()),
        }
    }

    /// Applies one symbol and forwards its side effects to `feedback`.
    ///
    /// The cue is requested before the message, and both are requested after
    /// the state change.
    pub fn handle_input<F>(&mut self, symbol: InputSymbol, mut feedback: F) -> Transition
    where
        F: Feedback,
    {
        let transition = self.apply(symbol);
        if let Some(cue) = transition.cue() {
            feedback.play_cue(cue);
        }
        if let Some(message) = transition.message() {
            feedback.present_message(message);
        }
        transition
    }

    /// Checks the current code and empties it.
    pub fn try_code(&mut self) -> SubmitOutcome {
        let code = std::mem::take(&mut self.code);
        match self.solutions.lookup(&code) {
            Some(clue) => {
                log::debug!("code accepted (length {})", code.len());
                SubmitOutcome::Matched {
                    clue: clue.to_owned(),
                    code,
                }
            }
            None => {
                log::debug!("code rejected (length {})", code.len());
                SubmitOutcome::Rejected { code }
            }
        }
    }
}

impl Default for CodeEntry {
    fn default() -> Self {
        Self::new(SolutionTable::builtin())
    }
}
