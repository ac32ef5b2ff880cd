use thiserror::Error;

use crate::slack_message::SlackMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of rendering one webhook event.
pub enum FormatOutcome {
    Ignored,
    Message(SlackMessage),
    Error(String),
}

impl From<FormatResult> for FormatOutcome {
    fn from(result: FormatResult) -> Self {
        match result {
            Ok(Some(message)) => Self::Message(message),
            Ok(None) => Self::Ignored,
            Err(error) => Self::Error(error.to_string()),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
/// Enumerates supported `FormatError` values.
pub enum FormatError {
    #[error("unhandled action: {action}")]
    UnhandledAction {
        object_kind: &'static str,
        action: String,
    },
    #[error("unhandled action: {object_kind} event has neither action nor state")]
    MissingAction { object_kind: &'static str },
    #[error("unhandled comment")]
    UnhandledComment,
}

/// `Ok(None)` means the event is deliberately not announced.
pub type FormatResult = Result<Option<SlackMessage>, FormatError>;

#[cfg(test)]
mod tests {
    use super::{FormatError, FormatOutcome};
    use crate::slack_message::SlackMessage;

    #[test]
    fn unit_format_outcome_from_result_covers_every_case() {
        assert_eq!(FormatOutcome::from(Ok(None)), FormatOutcome::Ignored);
        assert_eq!(
            FormatOutcome::from(Ok(Some(SlackMessage::markdown("hi")))),
            FormatOutcome::Message(SlackMessage::markdown("hi"))
        );
        assert_eq!(
            FormatOutcome::from(Err(FormatError::UnhandledAction {
                object_kind: "merge_request",
                action: "locked".to_string(),
            })),
            FormatOutcome::Error("unhandled action: locked".to_string())
        );
    }
}
