use rubber_core::{CodeEntry, SolutionTable};

use crate::state::Settings;

// AppState holds the game session: the code being entered and the settings.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) code_entry: CodeEntry,
    pub(crate) settings: Settings,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(solutions: SolutionTable) -> Self {
        Self {
            code_entry: CodeEntry::new(solutions),
            settings: Settings::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SolutionTable::builtin())
    }
}
