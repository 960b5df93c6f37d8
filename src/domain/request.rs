use crate::domain::code::{ContentType, EncryptionType, ReportType, TextType, ViettelEncryption};
use crate::domain::value::{CampaignId, Destination, MessageText, SenderId, SmsId};

#[derive(Debug, Clone, Default)]
pub struct SendMessageOptions {
    /// Text encoding. `None` leaves the field out and lets the gateway default to ASCII.
    pub unicode: Option<TextType>,
    pub report: ReportType,
    pub sms_id: Option<SmsId>,
    pub campaign_id: Option<CampaignId>,
    pub encryption: EncryptionType,
    pub content: ContentType,
    pub viettel_encryption: ViettelEncryption,
}

/// Standard send request (`POST /webapi/sendSMS` on the primary host).
#[derive(Debug, Clone)]
pub struct SendMessage {
    from: SenderId,
    to: Destination,
    text: MessageText,
    options: SendMessageOptions,
}

impl SendMessage {
    pub fn new(
        from: SenderId,
        to: Destination,
        text: MessageText,
        options: SendMessageOptions,
    ) -> Self {
        Self {
            from,
            to,
            text,
            options,
        }
    }

    pub fn from(&self) -> &SenderId {
        &self.from
    }

    pub fn to(&self) -> &Destination {
        &self.to
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn options(&self) -> &SendMessageOptions {
        &self.options
    }
}

/// Options accepted by the debit endpoint.
///
/// The debit endpoint does not take unicode, encryption, or content classification flags.
#[derive(Debug, Clone, Default)]
pub struct DebitOptions {
    pub report: ReportType,
    pub sms_id: Option<SmsId>,
}

/// Debit send request, billed against the separate debit quota.
#[derive(Debug, Clone)]
pub struct SendDebitMessage {
    from: SenderId,
    to: Destination,
    text: MessageText,
    options: DebitOptions,
}

impl SendDebitMessage {
    pub fn new(from: SenderId, to: Destination, text: MessageText, options: DebitOptions) -> Self {
        Self {
            from,
            to,
            text,
            options,
        }
    }

    pub fn from(&self) -> &SenderId {
        &self.from
    }

    pub fn to(&self) -> &Destination {
        &self.to
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn options(&self) -> &DebitOptions {
        &self.options
    }
}
