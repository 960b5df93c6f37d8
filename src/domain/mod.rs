//! Domain layer: strong types with validation and invariants (no I/O).

mod code;
mod request;
mod response;
mod validation;
mod value;

pub use code::{
    ContentType, EncryptionType, ErrorCode, KnownErrorCode, MobileNumberPortability, ReportType,
    ResponseStatus, TextType, ViettelEncryption,
};
pub use request::{DebitOptions, SendDebitMessage, SendMessage, SendMessageOptions};
pub use response::SendMessageResponse;
pub use validation::ValidationError;
pub use value::{ApiKey, CampaignId, Destination, MessageText, PhoneNumber, SenderId, SmsId};
