//! The code-to-clue lookup table.

use std::collections::{BTreeMap, btree_map::Entry};

/// Errors returned when building a [`SolutionTable`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolutionTableError {
    /// A code was empty. The empty code is what an untouched keypad submits.
    #[display("solution code must not be empty")]
    EmptyCode,
    /// The same code was listed twice.
    #[display("duplicate solution code: {code:?}")]
    DuplicateCode {
        /// The repeated code.
        code: String,
    },
}

const BUILTIN_SOLUTIONS: [(&str, &str); 5] = [
    (
        "00000",
        "Welcome to the hunt! You can find your first set of questions at x 🏃🏻",
    ),
    (
        "12345",
        "Fantastic! Chill.. You can find a new set of questions and grab a cold one at the same time 🍺",
    ),
    (
        "11111",
        "Good job guys, you're doing well. Please don't ask me how to print again - copy that! 🖨",
    ),
    (
        "22222",
        "Hurrah, another one in the bag. You're welcome. No, really -- welcome to Whitbread Digital, 120 Holborn ☎️",
    ),
    (
        "78564",
        "Nice one! You solved the final set of questions. You've found the secret phrase:\n\n'PI Apps are the best!'\n\nGo! NOW!",
    ),
];

/// An immutable mapping from codes to clue messages.
///
/// Lookup is by exact string equality: no trimming, no case folding and no
/// prefix matching. Codes have no fixed length.
///
/// # Examples
///
/// ```
/// use rubber_core::SolutionTable;
///
/// let table = SolutionTable::builtin();
/// assert!(table.lookup("00000").is_some());
/// assert!(table.lookup("0000").is_none());
/// assert_eq!(table.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionTable {
    solutions: BTreeMap<String, String>,
}

impl SolutionTable {
    /// Returns the table of the five codes shipped with the game.
    #[must_use]
    pub fn builtin() -> Self {
        let solutions = BUILTIN_SOLUTIONS
            .iter()
            .map(|&(code, clue)| (code.to_owned(), clue.to_owned()))
            .collect();
        Self { solutions }
    }

    /// Builds a table from `(code, clue)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`SolutionTableError::EmptyCode`] if a code is empty, and
    /// [`SolutionTableError::DuplicateCode`] if a code appears more than once.
    ///
    /// # Examples
    ///
    /// ```
    /// use rubber_core::{SolutionTable, SolutionTableError};
    ///
    /// let table = SolutionTable::new([("42", "The answer")]).unwrap();
    /// assert_eq!(table.lookup("42"), Some("The answer"));
    ///
    /// let err = SolutionTable::new([("1", "a"), ("1", "b")]).unwrap_err();
    /// assert!(matches!(err, SolutionTableError::DuplicateCode { .. }));
    /// ```
    pub fn new<I, C, M>(entries: I) -> Result<Self, SolutionTableError>
    where
        I: IntoIterator<Item = (C, M)>,
        C: Into<String>,
        M: Into<String>,
    {
        let mut solutions = BTreeMap::<String, String>::new();
        for (code, clue) in entries {
            let code = code.into();
            if code.is_empty() {
                return Err(SolutionTableError::EmptyCode);
            }
            match solutions.entry(code) {
                Entry::Occupied(entry) => {
                    return Err(SolutionTableError::DuplicateCode {
                        code: entry.key().clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(clue.into());
                }
            }
        }
        Ok(Self { solutions })
    }

    /// Returns the clue for `code`, if it is a solution.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<&str> {
        self.solutions.get(code).map(String::as_str)
    }

    /// Returns the number of solutions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Returns `true` if the table has no solutions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Iterates over `(code, clue)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.solutions
            .iter()
            .map(|(code, clue)| (code.as_str(), clue.as_str()))
    }
}

impl Default for SolutionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_five_five_digit_codes() {
        let table = SolutionTable::builtin();
        assert_eq!(table.len(), 5);
        for (code, clue) in table.iter() {
            assert_eq!(code.len(), 5);
            assert!(code.bytes().all(|b| b.is_ascii_digit()));
            assert!(!clue.is_empty());
        }
    }

    #[test]
    fn lookup_is_exact() {
        let table = SolutionTable::builtin();
        assert!(
            table
                .lookup("00000")
                .is_some_and(|clue| clue.starts_with("Welcome to the hunt!"))
        );
        assert_eq!(table.lookup("0000"), None);
        assert_eq!(table.lookup("000000"), None);
        assert_eq!(table.lookup(" 00000"), None);
        assert_eq!(table.lookup(""), None);
    }

    #[test]
    fn final_clue_keeps_line_breaks() {
        let table = SolutionTable::builtin();
        let clue = table.lookup("78564").expect("final code is built in");
        assert!(clue.contains("\n\n'PI Apps are the best!'\n\n"));
    }

    #[test]
    fn new_rejects_empty_code() {
        assert_eq!(
            SolutionTable::new([("", "nothing")]),
            Err(SolutionTableError::EmptyCode)
        );
    }

    #[test]
    fn new_rejects_duplicate_code() {
        let err = SolutionTable::new([("12", "a"), ("34", "b"), ("12", "c")])
            .expect_err("duplicate code");
        assert_eq!(
            err,
            SolutionTableError::DuplicateCode {
                code: "12".to_owned()
            }
        );
        assert_eq!(err.to_string(), "duplicate solution code: \"12\"");
    }

    #[test]
    fn new_accepts_codes_of_any_length() {
        let table = SolutionTable::new([("1", "short"), ("123456789", "long")])
            .expect("distinct codes");
        assert_eq!(table.lookup("1"), Some("short"));
        assert_eq!(table.lookup("123456789"), Some("long"));
        assert!(!table.is_empty());
    }

    #[test]
    fn default_is_builtin() {
        assert_eq!(SolutionTable::default(), SolutionTable::builtin());
    }
}
