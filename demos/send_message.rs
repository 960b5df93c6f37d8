use std::io;

use tracing_subscriber::EnvFilter;
use worldsms::{
    DebugLogger, Destination, MessageText, SendMessage, SendMessageOptions, SenderId, TextType,
    WorldSmsClient,
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
    let message = std::env::var("WORLDSMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the worldsms demo.".to_owned());

    let client = WorldSmsClient::builder(api_key)
        .logger(DebugLogger::tracing())
        .build()?;
    let request = SendMessage::new(
        SenderId::new(sender)?,
        Destination::new(phone)?,
        MessageText::new(message)?,
        SendMessageOptions {
            unicode: Some(TextType::Unicode),
            ..Default::default()
        },
    );

    let outcome = client.send_message(request).await?;
    println!("http status: {}", outcome.http.status);
    if let Some(response) = outcome.response {
        println!(
            "status: {:?}, error_code: {:?}, mnp: {:?}, carrier: {:?}",
            response.status, response.error_code, response.mnp, response.carrier
        );
    }

    Ok(())
}
