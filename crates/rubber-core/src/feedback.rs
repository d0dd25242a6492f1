//! Outbound side effects of the code-entry state machine.

/// A short named sound played in response to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Cue {
    /// A digit was entered.
    #[display("beep")]
    Beep,
    /// A submitted code matched a solution.
    #[display("success")]
    Success,
    /// A submitted code matched nothing.
    #[display("error")]
    Error,
}

impl Cue {
    /// All cues, in declaration order.
    pub const ALL: [Self; 3] = [Self::Beep, Self::Success, Self::Error];

    /// Returns the asset name of this cue.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beep => "beep",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A modal message with a single dismiss action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Heading of the modal.
    pub title: String,
    /// Body text of the modal.
    pub body: String,
}

impl Message {
    /// Title shown when a code is accepted.
    pub const SOLVED_TITLE: &'static str = "CORRECT!";

    /// Creates the message announcing a solved code with its clue.
    #[must_use]
    pub fn solved(clue: impl Into<String>) -> Self {
        Self {
            title: Self::SOLVED_TITLE.to_owned(),
            body: clue.into(),
        }
    }
}

/// Receiver of the side effects requested by [`CodeEntry`](crate::CodeEntry).
///
/// Both effects are fire-and-forget: implementations report failures
/// themselves (typically by logging) and never block on playback or on the
/// user dismissing a message.
pub trait Feedback {
    /// Starts playing a cue. A cue may overlap one that is still playing.
    fn play_cue(&mut self, cue: Cue);

    /// Shows a message with a single dismiss action.
    fn present_message(&mut self, message: Message);
}

impl<F> Feedback for &mut F
where
    F: Feedback + ?Sized,
{
    fn play_cue(&mut self, cue: Cue) {
        (**self).play_cue(cue);
    }

    fn present_message(&mut self, message: Message) {
        (**self).present_message(message);
    }
}
