//! Typed Rust client for the South Telecom (`worldsms.vn`) SMS HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for the
//! JSON wire format, and a small client layer that builds requests, executes them
//! through a pluggable [`HttpTransport`], and classifies responses.
//!
//! ```rust,no_run
//! use worldsms::{
//!     Destination, MessageText, SendMessage, SendMessageOptions, SenderId, WorldSmsClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), worldsms::WorldSmsError> {
//!     let client = WorldSmsClient::new("...")?;
//!     let request = SendMessage::new(
//!         SenderId::new("VienThongMN")?,
//!         Destination::new("84932123456")?,
//!         MessageText::new("hello")?,
//!         SendMessageOptions::default(),
//!     );
//!     let outcome = client.send_message(request).await?;
//!     if let Some(response) = outcome.response {
//!         println!("status: {:?}, error: {:?}", response.status, response.error_code);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxError, BoxFuture, ConfigError, DebugLogger, HttpRequest, HttpResponse, HttpTransport,
    ReqwestTransport, SendOutcome, WorldSmsClient, WorldSmsClientBuilder, WorldSmsError,
};
pub use domain::{
    ApiKey, CampaignId, ContentType, DebitOptions, Destination, EncryptionType, ErrorCode,
    KnownErrorCode, MessageText, MobileNumberPortability, PhoneNumber, ReportType,
    ResponseStatus, SendDebitMessage, SendMessage, SendMessageOptions, SendMessageResponse,
    SenderId, SmsId, TextType, ValidationError, ViettelEncryption,
};
