//! Keypad input symbols.

use std::fmt::{self, Display};

/// One discrete unit of keypad input.
///
/// Each keypad control is tagged with the symbol it produces, so the game
/// logic never has to inspect the visible label text.
///
/// # Examples
///
/// ```
/// use rubber_core::InputSymbol;
///
/// assert_eq!(InputSymbol::from_label("🔑"), InputSymbol::Submit);
/// assert_eq!(InputSymbol::from_label("E"), InputSymbol::Clear);
/// assert_eq!(InputSymbol::from_label("7"), InputSymbol::digit("7"));
///
/// assert_eq!(InputSymbol::Submit.label(), "🔑");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum InputSymbol {
    /// Appends the value to the current code.
    Digit(String),
    /// Discards the current code.
    Clear,
    /// Checks the current code against the solution table.
    Submit,
}

impl InputSymbol {
    /// Label of the key that submits the current code.
    pub const SUBMIT_LABEL: &'static str = "🔑";
    /// Label of the key that clears the current code.
    pub const CLEAR_LABEL: &'static str = "E";

    /// Creates a digit symbol.
    #[must_use]
    pub fn digit(value: impl Into<String>) -> Self {
        Self::Digit(value.into())
    }

    /// Interprets the label text of a keypad control.
    ///
    /// `🔑` submits, `E` clears, and any other text is appended verbatim as a
    /// digit.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            Self::SUBMIT_LABEL => Self::Submit,
            Self::CLEAR_LABEL => Self::Clear,
            _ => Self::digit(label),
        }
    }

    /// Returns the label text displayed for this symbol.
    ///
    /// This is the inverse of [`InputSymbol::from_label`].
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Digit(value) => value,
            Self::Clear => Self::CLEAR_LABEL,
            Self::Submit => Self::SUBMIT_LABEL,
        }
    }
}

impl Display for InputSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
