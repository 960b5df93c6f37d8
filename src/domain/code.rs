//! Integer-coded flags and statuses defined by the gateway's API contract.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Top-level outcome of a send request (`status`).
pub enum ResponseStatus {
    Failure,
    Success,
}

impl ResponseStatus {
    /// JSON field name used by the gateway (`status`).
    pub const FIELD: &'static str = "status";

    /// Integer value used on the wire.
    pub fn code(self) -> u8 {
        match self {
            Self::Failure => 0,
            Self::Success => 1,
        }
    }

    /// Map a wire value to a status.
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => Self::Failure,
            1 => Self::Success,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Text encoding of the message (`unicode`).
pub enum TextType {
    #[default]
    Ascii,
    Unicode,
}

impl TextType {
    /// JSON field name used by the gateway (`unicode`).
    pub const FIELD: &'static str = "unicode";

    pub fn code(self) -> u8 {
        match self {
            Self::Ascii => 0,
            Self::Unicode => 1,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => Self::Ascii,
            1 => Self::Unicode,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Whether the carrier's delivery report is forwarded to the customer (`dlr`).
pub enum ReportType {
    #[default]
    NoReport,
    ReportToCustomer,
}

impl ReportType {
    /// JSON field name used by the gateway (`dlr`).
    pub const FIELD: &'static str = "dlr";

    pub fn code(self) -> u8 {
        match self {
            Self::NoReport => 0,
            Self::ReportToCustomer => 1,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => Self::NoReport,
            1 => Self::ReportToCustomer,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Whether the message content is sent encrypted (`encrypted`).
pub enum EncryptionType {
    #[default]
    NonEncrypted,
    Encrypted,
}

impl EncryptionType {
    /// JSON field name used by the gateway (`encrypted`).
    pub const FIELD: &'static str = "encrypted";

    pub fn code(self) -> u8 {
        match self {
            Self::NonEncrypted => 0,
            Self::Encrypted => 1,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => Self::NonEncrypted,
            1 => Self::Encrypted,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Content classification of the message (`contentid`).
pub enum ContentType {
    #[default]
    Normal,
    Otp,
    BalanceAlert,
}

impl ContentType {
    /// JSON field name used by the gateway (`contentid`).
    pub const FIELD: &'static str = "contentid";

    pub fn code(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Otp => 1,
            Self::BalanceAlert => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => Self::Normal,
            1 => Self::Otp,
            2 => Self::BalanceAlert,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Whether messages to Viettel subscribers must be encrypted (`mustencryptviettel`).
pub enum ViettelEncryption {
    #[default]
    OnDemand,
    Mandatory,
}

impl ViettelEncryption {
    /// JSON field name used by the gateway (`mustencryptviettel`).
    pub const FIELD: &'static str = "mustencryptviettel";

    pub fn code(self) -> u8 {
        match self {
            Self::OnDemand => 0,
            Self::Mandatory => 1,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => Self::OnDemand,
            1 => Self::Mandatory,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Mobile number portability status of the destination (`mnp`).
pub enum MobileNumberPortability {
    /// The subscriber has not switched networks.
    SameNetwork,
    /// The subscriber switched networks but kept the number.
    SwitchedNetwork,
}

impl MobileNumberPortability {
    /// JSON field name used by the gateway (`mnp`).
    pub const FIELD: &'static str = "mnp";

    pub fn code(self) -> u8 {
        match self {
            Self::SameNetwork => 0,
            Self::SwitchedNetwork => 1,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => Self::SameNetwork,
            1 => Self::SwitchedNetwork,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Gateway error code (`errorcode`).
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct ErrorCode(i32);

impl ErrorCode {
    /// JSON field name used by the gateway (`errorcode`).
    pub const FIELD: &'static str = "errorcode";

    /// Construct an error code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by the gateway.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known error code variant, if one exists.
    pub fn known_kind(self) -> Option<KnownErrorCode> {
        KnownErrorCode::from_code(self.0)
    }

    /// Returns `true` if the gateway rejected the credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(self.known_kind(), Some(kind) if kind.is_auth_error())
    }

    /// Returns `true` if the encryption flag did not match the destination's carrier.
    pub fn is_encryption_mismatch(self) -> bool {
        matches!(self.known_kind(), Some(kind) if kind.is_encryption_mismatch())
    }
}

impl From<KnownErrorCode> for ErrorCode {
    fn from(value: KnownErrorCode) -> Self {
        Self(value.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Error codes documented by the gateway.
///
/// Unknown codes are preserved as [`ErrorCode`] and return `None` from [`KnownErrorCode::from_code`].
pub enum KnownErrorCode {
    Unauthorized,
    InvalidPassword,
    InvalidUser,
    GatewayError,
    InvalidIp,
    InvalidInputParams,
    InvalidPhoneNumber,
    InvalidSender,
    InvalidContent,
    DebitApiPermissionDenied,
    DebitPermissionDenied,
    AccountOverQuota,
    /// The subscriber switched to a network that is not registered with the gateway.
    InvalidPhoneNumberMnp,
    InvalidMessageLength,
    /// The destination is not a Viettel subscriber but the message is encrypted.
    ContentMustNotBeEncrypted,
    /// The destination is a Viettel subscriber but the message is not encrypted.
    ContentMustBeEncrypted,
}

impl KnownErrorCode {
    /// Convert a raw integer error code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            40 => Self::Unauthorized,
            41 => Self::InvalidPassword,
            42 => Self::InvalidUser,
            50 => Self::GatewayError,
            51 => Self::InvalidIp,
            52 => Self::InvalidInputParams,
            53 => Self::InvalidPhoneNumber,
            54 => Self::InvalidSender,
            55 => Self::InvalidContent,
            80 => Self::DebitApiPermissionDenied,
            81 => Self::DebitPermissionDenied,
            82 => Self::AccountOverQuota,
            531 => Self::InvalidPhoneNumberMnp,
            551 => Self::InvalidMessageLength,
            552 => Self::ContentMustNotBeEncrypted,
            553 => Self::ContentMustBeEncrypted,
            _ => return None,
        })
    }

    /// Integer value used on the wire.
    pub fn code(self) -> i32 {
        match self {
            Self::Unauthorized => 40,
            Self::InvalidPassword => 41,
            Self::InvalidUser => 42,
            Self::GatewayError => 50,
            Self::InvalidIp => 51,
            Self::InvalidInputParams => 52,
            Self::InvalidPhoneNumber => 53,
            Self::InvalidSender => 54,
            Self::InvalidContent => 55,
            Self::DebitApiPermissionDenied => 80,
            Self::DebitPermissionDenied => 81,
            Self::AccountOverQuota => 82,
            Self::InvalidPhoneNumberMnp => 531,
            Self::InvalidMessageLength => 551,
            Self::ContentMustNotBeEncrypted => 552,
            Self::ContentMustBeEncrypted => 553,
        }
    }

    /// Whether this code indicates rejected credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self,
            Self::Unauthorized | Self::InvalidPassword | Self::InvalidUser
        )
    }

    /// Whether this code indicates a Viettel encryption mismatch.
    pub fn is_encryption_mismatch(self) -> bool {
        matches!(
            self,
            Self::ContentMustNotBeEncrypted | Self::ContentMustBeEncrypted
        )
    }
}
