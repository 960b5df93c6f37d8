use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidSenderId { input: String },
    InvalidDestination { input: String },
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidSenderId { input } => write!(
                f,
                "invalid sender id: {input} (expected 3..=11 alphanumeric characters or a numeric id)"
            ),
            Self::InvalidDestination { input } => write!(
                f,
                "invalid destination: {input} (expected international format, e.g. 84987654321)"
            ),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}
