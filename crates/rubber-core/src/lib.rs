//! Core game logic for Rubber, a treasure-hunt keypad game.
//!
//! The player types a code on a keypad and submits it. Each known code
//! reveals the clue leading to the next stage of the hunt.
//!
//! # Overview
//!
//! - [`InputSymbol`]: one key press (digit, clear, or submit).
//! - [`SolutionTable`]: the immutable mapping from codes to clues.
//! - [`CodeEntry`]: the state machine that accumulates digits and checks
//!   submitted codes, reporting outcomes through [`Feedback`].
//! - [`HitArea`]: the touch-target policy that keeps small keys tappable.
//!
//! The crate has no UI dependency; hosts implement [`Feedback`] to play cues
//! and show messages.
//!
//! # Example
//!
//! ```
//! use rubber_core::{CodeEntry, Cue, InputSymbol, SolutionTable};
//!
//! let mut entry = CodeEntry::new(SolutionTable::builtin());
//!
//! for digit in ["7", "8", "5", "6", "4"] {
//!     entry.apply(InputSymbol::digit(digit));
//! }
//! let transition = entry.apply(InputSymbol::Submit);
//!
//! assert_eq!(transition.cue(), Some(Cue::Success));
//! assert!(transition.message().is_some());
//! assert_eq!(entry.current_code(), "");
//! ```

pub use self::{entry::*, feedback::*, hit_area::*, solution::*, symbol::*};

mod entry;
mod feedback;
mod hit_area;
mod solution;
mod symbol;
