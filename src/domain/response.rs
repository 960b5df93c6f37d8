use crate::domain::code::{ErrorCode, MobileNumberPortability, ResponseStatus};

/// Decoded body of a send or debit send reply.
///
/// A `Failure` status is a normal response: inspect [`SendMessageResponse::error_code`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageResponse {
    pub status: ResponseStatus,
    pub error_code: Option<ErrorCode>,
    pub mnp: Option<MobileNumberPortability>,
    /// Current carrier of the subscriber.
    pub carrier: Option<String>,
}

impl SendMessageResponse {
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}
