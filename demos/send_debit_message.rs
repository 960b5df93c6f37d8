use std::io;

use tracing_subscriber::EnvFilter;
use worldsms::{
    DebitOptions, DebugLogger, Destination, MessageText, ReportType, SendDebitMessage, SenderId,
    SmsId, WorldSmsClient,
};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = required_env("WORLDSMS_API_KEY")?;
    let sender = required_env("WORLDSMS_SENDER")?;
    let phone = required_env("WORLDSMS_PHONE")?;

    let mut client = WorldSmsClient::builder(api_key)
        .logger(DebugLogger::tracing())
        .build()?;
    if let Ok(debit_url) = std::env::var("WORLDSMS_DEBIT_URL") {
        client.set_debit_base_url(&debit_url)?;
    }

    let request = SendDebitMessage::new(
        SenderId::new(sender)?,
        Destination::new(phone)?,
        MessageText::new("Your balance changed.")?,
        DebitOptions {
            report: ReportType::ReportToCustomer,
            sms_id: Some(SmsId::new("demo-debit-1")?),
        },
    );

    match client.send_debit_message(request).await {
        Ok(outcome) => {
            println!("http status: {}", outcome.http.status);
            if let Some(response) = outcome.response {
                println!(
                    "status: {:?}, error_code: {:?}, mnp: {:?}, carrier: {:?}",
                    response.status, response.error_code, response.mnp, response.carrier
                );
            }
        }
        Err(err) => {
            eprintln!("send failed: {err}");
            if let Some(response) = err.http_response() {
                eprintln!("http status: {}", response.status);
            }
        }
    }

    Ok(())
}
