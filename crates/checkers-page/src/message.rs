//! The game's status line vocabulary.
//!
//! During normal play the `#message` region always holds one of a small
//! fixed set of phrasings. Classification is total: anything outside the
//! set becomes [`Phrase::Unrecognized`] rather than an error, and the
//! ready-wait then surfaces the problem as a timeout naming its condition.

/// Classified game message. `classify` never fails; callers that need the
/// verbatim text read it from the page directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phrase {
    /// "Select an orange piece to move." — fresh board, user to act.
    SelectPiece,
    /// "Click on your orange piece, then click where you want to move it."
    /// Shown after a selection the game did not accept.
    PickDestination,
    /// "Make a move." — the computer has replied, user to act again.
    MakeMove,
    /// "Please wait." — the computer is thinking or pieces are moving.
    PleaseWait,
    /// Anything outside the known vocabulary, kept verbatim for logs.
    Unrecognized(String),
}

impl Phrase {
    pub fn classify(text: &str) -> Phrase {
        match text.trim() {
            "Select an orange piece to move." => Phrase::SelectPiece,
            "Click on your orange piece, then click where you want to move it." => {
                Phrase::PickDestination
            }
            "Make a move." => Phrase::MakeMove,
            "Please wait." => Phrase::PleaseWait,
            other => Phrase::Unrecognized(other.to_string()),
        }
    }

    /// True for the phrasings that mean the game is idle and waiting for
    /// the user's next click.
    pub fn is_awaiting_input(&self) -> bool {
        matches!(
            self,
            Phrase::SelectPiece | Phrase::PickDestination | Phrase::MakeMove
        )
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Phrase::Unrecognized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_phrasings() {
        assert_eq!(
            Phrase::classify("Select an orange piece to move."),
            Phrase::SelectPiece
        );
        assert_eq!(Phrase::classify("Make a move."), Phrase::MakeMove);
        assert_eq!(Phrase::classify("Please wait."), Phrase::PleaseWait);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(
            Phrase::classify("  Select an orange piece to move.\n"),
            Phrase::SelectPiece
        );
    }

    #[test]
    fn awaiting_input_excludes_wait_and_unknown() {
        assert!(Phrase::SelectPiece.is_awaiting_input());
        assert!(Phrase::PickDestination.is_awaiting_input());
        assert!(Phrase::MakeMove.is_awaiting_input());
        assert!(!Phrase::PleaseWait.is_awaiting_input());
        assert!(!Phrase::classify("Loading...").is_awaiting_input());
    }

    #[test]
    fn unknown_text_is_kept_verbatim() {
        match Phrase::classify("Something went wrong") {
            Phrase::Unrecognized(text) => assert_eq!(text, "Something went wrong"),
            other => panic!("expected Unrecognized, got {other:?}"),
        }
    }
}
