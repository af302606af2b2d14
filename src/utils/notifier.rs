use tracing::info;

use crate::error::AppError;

/// Outbound delivery of verification codes.
pub trait Notifier: Send + Sync {
    fn send(&self, address: &str, subject: &str, body: &str) -> Result<(), AppError>;
}

/// Writes each message to the log instead of a mail server.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send(&self, address: &str, subject: &str, body: &str) -> Result<(), AppError> {
        info!(to = %address, subject = %subject, body = %body, "[EMAIL]");
        Ok(())
    }
}

#[cfg(test)]
pub use recording::RecordingNotifier;

#[cfg(test)]
mod recording {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    pub struct SentMessage {
        pub address: String,
        pub subject: String,
        pub body: String,
    }

    /// Keeps every message so tests can read the code back.
    #[derive(Default)]
    pub struct RecordingNotifier {
        sent: Mutex<Vec<SentMessage>>,
        pub fail: bool,
    }

    impl RecordingNotifier {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn sent(&self) -> Vec<SentMessage> {
            self.sent.lock().unwrap().clone()
        }

        /// Code from the most recent message.
        pub fn last_code(&self) -> Option<String> {
            self.sent
                .lock()
                .unwrap()
                .last()
                .and_then(|m| m.body.strip_prefix("Your code is: "))
                .map(str::to_string)
        }
    }

    impl Notifier for RecordingNotifier {
        fn send(&self, address: &str, subject: &str, body: &str) -> Result<(), AppError> {
            if self.fail {
                return Err(AppError::Internal("mail relay unavailable".into()));
            }
            self.sent.lock().unwrap().push(SentMessage {
                address: address.to_string(),
                subject: subject.to_string(),
                body: body.to_string(),
            });
            Ok(())
        }
    }
}
