//! Interactive prompts.
//!
//! The controller asks the front end for confirmations and text through the
//! [`Prompt`] trait. Every prompt happens before any filesystem call, so a
//! cancellation simply abandons the action.

/// Answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
    /// The user dismissed the dialog without answering.
    Cancelled,
}

impl Confirmation {
    /// Returns `true` only for an explicit [`Confirmation::Yes`].
    pub fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

/// Prompt provider consumed by the [`crate::Controller`].
pub trait Prompt {
    /// Asks a yes/no question. `default_no` selects the answer used when the
    /// user just accepts the dialog.
    fn confirm(&mut self, message: &str, default_no: bool) -> Confirmation;

    /// Asks for a line of text, pre-filled with `prefill`.
    ///
    /// Returns `None` if the user cancelled.
    fn request_text(&mut self, prompt: &str, title: &str, prefill: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_yes_is_yes() {
        assert!(Confirmation::Yes.is_yes());
        assert!(!Confirmation::No.is_yes());
        assert!(!Confirmation::Cancelled.is_yes());
    }
}
