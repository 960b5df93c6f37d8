//! Transport layer: wire-format details (serialization/deserialization).

mod send_message;

pub use send_message::{
    SEND_SMS_PATH, TransportError, decode_send_message_response, encode_send_debit_body,
    encode_send_message_body,
};
