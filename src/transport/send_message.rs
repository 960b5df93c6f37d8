use serde::{Deserialize, Serialize};

use crate::domain::{
    ErrorCode, MobileNumberPortability, ResponseStatus, SendDebitMessage, SendMessage,
    SendMessageResponse,
};

/// Path of the send endpoint, shared by the primary and debit hosts.
pub const SEND_SMS_PATH: &str = "/webapi/sendSMS";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response contains unknown {field} value: {value}")]
    UnknownCode { field: &'static str, value: i64 },
}

#[derive(Debug, Serialize)]
struct SendMessageJsonBody<'a> {
    from: &'a str,
    to: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    unicode: Option<u8>,
    dlr: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    smsid: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    messageid: Option<&'a str>,
    encrypted: u8,
    contentid: u8,
    mustencryptviettel: u8,
}

#[derive(Debug, Serialize)]
struct SendDebitJsonBody<'a> {
    from: &'a str,
    to: &'a str,
    text: &'a str,
    dlr: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    smsid: Option<&'a str>,
}

#[derive(Debug, Clone, Deserialize)]
struct SendMessageJsonResponse {
    status: i64,
    #[serde(default)]
    errorcode: Option<i32>,
    #[serde(default)]
    mnp: Option<i64>,
    #[serde(default)]
    carrier: Option<String>,
}

pub fn encode_send_message_body(request: &SendMessage) -> Result<String, serde_json::Error> {
    let options = request.options();
    let body = SendMessageJsonBody {
        from: request.from().as_str(),
        to: request.to().as_str(),
        text: request.text().as_str(),
        unicode: options.unicode.map(|it| it.code()),
        dlr: options.report.code(),
        smsid: options.sms_id.as_ref().map(|it| it.as_str()),
        messageid: options.campaign_id.as_ref().map(|it| it.as_str()),
        encrypted: options.encryption.code(),
        contentid: options.content.code(),
        mustencryptviettel: options.viettel_encryption.code(),
    };
    serde_json::to_string(&body)
}

pub fn encode_send_debit_body(request: &SendDebitMessage) -> Result<String, serde_json::Error> {
    let options = request.options();
    let body = SendDebitJsonBody {
        from: request.from().as_str(),
        to: request.to().as_str(),
        text: request.text().as_str(),
        dlr: options.report.code(),
        smsid: options.sms_id.as_ref().map(|it| it.as_str()),
    };
    serde_json::to_string(&body)
}

pub fn decode_send_message_response(json: &str) -> Result<SendMessageResponse, TransportError> {
    let parsed: SendMessageJsonResponse = serde_json::from_str(json)?;

    let status =
        ResponseStatus::from_code(parsed.status).ok_or(TransportError::UnknownCode {
            field: ResponseStatus::FIELD,
            value: parsed.status,
        })?;

    let mnp = parsed
        .mnp
        .map(|value| {
            MobileNumberPortability::from_code(value).ok_or(TransportError::UnknownCode {
                field: MobileNumberPortability::FIELD,
                value,
            })
        })
        .transpose()?;

    // `0` is what the gateway sends when there is nothing to report.
    let error_code = parsed
        .errorcode
        .filter(|code| *code != 0)
        .map(ErrorCode::new);

    Ok(SendMessageResponse {
        status,
        error_code,
        mnp,
        carrier: parsed.carrier,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::domain::{
        CampaignId, ContentType, DebitOptions, Destination, EncryptionType, KnownErrorCode,
        MessageText, ReportType, SendMessageOptions, SenderId, SmsId, TextType, ViettelEncryption,
    };

    use super::*;

    fn sender() -> SenderId {
        SenderId::new("VienThongMN").unwrap()
    }

    fn destination() -> Destination {
        Destination::new("84932123456").unwrap()
    }

    #[test]
    fn encode_full_send_message_body() {
        let request = SendMessage::new(
            sender(),
            destination(),
            MessageText::new("hello").unwrap(),
            SendMessageOptions {
                unicode: Some(TextType::Unicode),
                report: ReportType::ReportToCustomer,
                sms_id: Some(SmsId::new("random_id").unwrap()),
                campaign_id: Some(CampaignId::new("random_campaign_id").unwrap()),
                encryption: EncryptionType::Encrypted,
                content: ContentType::BalanceAlert,
                viettel_encryption: ViettelEncryption::Mandatory,
            },
        );

        let body: Value =
            serde_json::from_str(&encode_send_message_body(&request).unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "from": "VienThongMN",
                "to": "84932123456",
                "text": "hello",
                "unicode": 1,
                "dlr": 1,
                "smsid": "random_id",
                "messageid": "random_campaign_id",
                "encrypted": 1,
                "contentid": 2,
                "mustencryptviettel": 1
            })
        );
    }

    #[test]
    fn encode_omits_unset_optional_fields() {
        let request = SendMessage::new(
            sender(),
            destination(),
            MessageText::new("hello").unwrap(),
            SendMessageOptions::default(),
        );

        let body: Value =
            serde_json::from_str(&encode_send_message_body(&request).unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "from": "VienThongMN",
                "to": "84932123456",
                "text": "hello",
                "dlr": 0,
                "encrypted": 0,
                "contentid": 0,
                "mustencryptviettel": 0
            })
        );
    }

    #[test]
    fn encode_debit_body_uses_reduced_field_set() {
        let request = SendDebitMessage::new(
            sender(),
            destination(),
            MessageText::new("hello").unwrap(),
            DebitOptions {
                report: ReportType::NoReport,
                sms_id: Some(SmsId::new("random_id").unwrap()),
            },
        );

        let body: Value = serde_json::from_str(&encode_send_debit_body(&request).unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "from": "VienThongMN",
                "to": "84932123456",
                "text": "hello",
                "dlr": 0,
                "smsid": "random_id"
            })
        );
    }

    #[test]
    fn decode_failure_response() {
        let resp = decode_send_message_response(r#"{"status":0,"errorcode":40}"#).unwrap();
        assert_eq!(resp.status, ResponseStatus::Failure);
        assert_eq!(
            resp.error_code.and_then(ErrorCode::known_kind),
            Some(KnownErrorCode::Unauthorized)
        );
        assert_eq!(resp.mnp, None);
        assert_eq!(resp.carrier, None);
    }

    #[test]
    fn decode_success_response_with_carrier() {
        let json = r#"
        {
          "status": 1,
          "errorcode": 0,
          "mnp": 1,
          "carrier": "Viettel"
        }
        "#;
        let resp = decode_send_message_response(json).unwrap();
        assert_eq!(resp.status, ResponseStatus::Success);
        assert_eq!(resp.error_code, None);
        assert_eq!(resp.mnp, Some(MobileNumberPortability::SwitchedNetwork));
        assert_eq!(resp.carrier.as_deref(), Some("Viettel"));
    }

    #[test]
    fn decode_rejects_unknown_codes_and_invalid_json() {
        assert!(matches!(
            decode_send_message_response(r#"{"status":7}"#),
            Err(TransportError::UnknownCode {
                field: "status",
                value: 7
            })
        ));
        assert!(matches!(
            decode_send_message_response(r#"{"status":1,"mnp":3}"#),
            Err(TransportError::UnknownCode { field: "mnp", .. })
        ));
        assert!(matches!(
            decode_send_message_response("{ not json }"),
            Err(TransportError::Json(_))
        ));
        assert!(matches!(
            decode_send_message_response(r#"{"errorcode":40}"#),
            Err(TransportError::Json(_))
        ));
    }

    #[test]
    fn request_flags_round_trip_through_the_wire() {
        let cases = [
            (TextType::Ascii, ContentType::Normal, ViettelEncryption::OnDemand),
            (TextType::Unicode, ContentType::Otp, ViettelEncryption::Mandatory),
            (
                TextType::Unicode,
                ContentType::BalanceAlert,
                ViettelEncryption::OnDemand,
            ),
        ];

        for (unicode, content, viettel_encryption) in cases {
            let request = SendMessage::new(
                sender(),
                destination(),
                MessageText::new("hello").unwrap(),
                SendMessageOptions {
                    unicode: Some(unicode),
                    content,
                    viettel_encryption,
                    report: ReportType::ReportToCustomer,
                    encryption: EncryptionType::Encrypted,
                    ..Default::default()
                },
            );
            let body: Value =
                serde_json::from_str(&encode_send_message_body(&request).unwrap()).unwrap();

            let code = |field: &str| body[field].as_i64().unwrap();
            assert_eq!(TextType::from_code(code("unicode")), Some(unicode));
            assert_eq!(ContentType::from_code(code("contentid")), Some(content));
            assert_eq!(
                ViettelEncryption::from_code(code("mustencryptviettel")),
                Some(viettel_encryption)
            );
            assert_eq!(
                ReportType::from_code(code("dlr")),
                Some(ReportType::ReportToCustomer)
            );
            assert_eq!(
                EncryptionType::from_code(code("encrypted")),
                Some(EncryptionType::Encrypted)
            );
        }
    }

    #[test]
    fn response_codes_round_trip_through_the_wire() {
        for status in [ResponseStatus::Success, ResponseStatus::Failure] {
            for mnp in [
                MobileNumberPortability::SameNetwork,
                MobileNumberPortability::SwitchedNetwork,
            ] {
                let json = json!({
                    "status": status.code(),
                    "errorcode": KnownErrorCode::ContentMustBeEncrypted.code(),
                    "mnp": mnp.code(),
                    "carrier": "Mobifone"
                })
                .to_string();
                let resp = decode_send_message_response(&json).unwrap();
                assert_eq!(resp.status, status);
                assert_eq!(resp.mnp, Some(mnp));
                assert_eq!(
                    resp.error_code.and_then(ErrorCode::known_kind),
                    Some(KnownErrorCode::ContentMustBeEncrypted)
                );
            }
        }
    }
}
