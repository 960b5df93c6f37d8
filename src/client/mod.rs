//! Client layer: builds requests, executes them, and classifies responses.

mod http;
mod logger;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{ApiKey, SendDebitMessage, SendMessage, SendMessageResponse, ValidationError};
use crate::transport::SEND_SMS_PATH;

pub use http::{BoxError, BoxFuture, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use logger::DebugLogger;

/// Default host for standard sends.
pub const DEFAULT_BASE_URL: &str = "https://api-01.worldsms.vn";
/// Default host for debit sends.
pub const DEFAULT_DEBIT_BASE_URL: &str = "https://api-04.worldsms.vn";

const LOG_PREFIX: &str = "[SouthTelecomSMS]";
const BASE_URL_FIELD: &str = "base url";
const DEBIT_BASE_URL_FIELD: &str = "base debit url";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Invalid client configuration, detected before any network call.
pub enum ConfigError {
    #[error("api key is required")]
    EmptyApiKey,

    #[error("incorrect {field} format: {input:?}: {reason}")]
    InvalidUrl {
        field: &'static str,
        input: String,
        reason: String,
    },
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`WorldSmsClient`].
///
/// A reply with HTTP 200 and `status = 0` is not an error; it is returned as a
/// [`SendMessageResponse`] carrying the gateway's error code.
pub enum WorldSmsError {
    /// Bad API key or malformed base URL.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The gateway answered with HTTP 500.
    #[error("internal server error")]
    Server { response: HttpResponse },

    /// Any other non-success HTTP status; the message is the raw response body.
    #[error("{}", .response.body)]
    Api { response: HttpResponse },

    /// Response body is not valid JSON of the expected shape.
    #[error("decode error: {source}")]
    Decode {
        #[source]
        source: BoxError,
        response: HttpResponse,
    },
}

impl WorldSmsError {
    /// The HTTP response that caused this error, if the gateway answered at all.
    pub fn http_response(&self) -> Option<&HttpResponse> {
        match self {
            Self::Server { response } | Self::Api { response } | Self::Decode { response, .. } => {
                Some(response)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Result of a send call that passed HTTP status classification.
pub struct SendOutcome {
    /// Decoded body, or `None` when the gateway sent no body (e.g. HTTP 204).
    pub response: Option<SendMessageResponse>,
    /// Raw HTTP response, for callers that need the status code or headers.
    pub http: HttpResponse,
}

#[derive(Clone)]
/// Builder for [`WorldSmsClient`].
///
/// Use this when you need to customize the endpoints, timeout, user-agent, transport, or
/// debug logger. URLs and the API key are validated in [`WorldSmsClientBuilder::build`].
pub struct WorldSmsClientBuilder {
    api_key: String,
    base_url: String,
    debit_base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
    logger: Option<DebugLogger>,
}

impl WorldSmsClientBuilder {
    /// Create a builder with the default endpoints.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            debit_base_url: DEFAULT_DEBIT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
            logger: None,
        }
    }

    /// Override the host used for standard sends.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the host used for debit sends.
    pub fn debit_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.debit_base_url = base_url.into();
        self
    }

    /// Set a timeout for the whole request on the built-in reqwest transport.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header on the built-in reqwest transport.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom [`HttpTransport`] instead of the built-in reqwest one.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Install a [`DebugLogger`] receiving request/response trace lines.
    pub fn logger(mut self, logger: DebugLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Build a [`WorldSmsClient`].
    pub fn build(self) -> Result<WorldSmsClient, WorldSmsError> {
        let api_key = ApiKey::new(self.api_key).map_err(|_| ConfigError::EmptyApiKey)?;
        let base_url = parse_base_url(BASE_URL_FIELD, &self.base_url)?;
        let debit_base_url = parse_base_url(DEBIT_BASE_URL_FIELD, &self.debit_base_url)?;

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| WorldSmsError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport::new(client)) as Arc<dyn HttpTransport>
            }
        };

        Ok(WorldSmsClient {
            api_key,
            base_url,
            debit_base_url,
            http,
            logger: self.logger,
        })
    }
}

#[derive(Clone)]
/// High-level South Telecom SMS client.
///
/// By default it uses:
/// - `https://api-01.worldsms.vn` for standard sends
/// - `https://api-04.worldsms.vn` for debit sends
///
/// Configure the client before sharing it; calls on a configured client only need `&self`.
pub struct WorldSmsClient {
    api_key: ApiKey,
    base_url: Url,
    debit_base_url: Url,
    http: Arc<dyn HttpTransport>,
    logger: Option<DebugLogger>,
}

impl WorldSmsClient {
    /// Create a client with the default endpoints and transport.
    ///
    /// Fails with [`ConfigError::EmptyApiKey`] when `api_key` is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, WorldSmsError> {
        Self::builder(api_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: impl Into<String>) -> WorldSmsClientBuilder {
        WorldSmsClientBuilder::new(api_key)
    }

    /// Host used for standard sends.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Host used for debit sends.
    pub fn debit_base_url(&self) -> &Url {
        &self.debit_base_url
    }

    /// Replace the host used for standard sends.
    ///
    /// On error the previous value is kept.
    pub fn set_base_url(&mut self, base_url: &str) -> Result<(), ConfigError> {
        self.base_url = parse_base_url(BASE_URL_FIELD, base_url)?;
        Ok(())
    }

    /// Replace the host used for debit sends.
    ///
    /// On error the previous value is kept.
    pub fn set_debit_base_url(&mut self, base_url: &str) -> Result<(), ConfigError> {
        self.debit_base_url = parse_base_url(DEBIT_BASE_URL_FIELD, base_url)?;
        Ok(())
    }

    /// Replace the HTTP transport.
    pub fn set_transport(&mut self, transport: impl HttpTransport + 'static) {
        self.http = Arc::new(transport);
    }

    /// Install or remove the debug logger.
    ///
    /// Response bodies are buffered into [`HttpResponse`] whether or not a logger is set.
    pub fn set_logger(&mut self, logger: Option<DebugLogger>) {
        self.logger = logger;
    }

    /// Send a message through the standard endpoint.
    ///
    /// Errors:
    /// - [`WorldSmsError::Transport`] when the request could not be executed,
    /// - [`WorldSmsError::Server`] for HTTP 500,
    /// - [`WorldSmsError::Api`] for any other status except 200 and 204,
    /// - [`WorldSmsError::Decode`] when the body is not the expected JSON.
    pub async fn send_message(&self, request: SendMessage) -> Result<SendOutcome, WorldSmsError> {
        let body =
            crate::transport::encode_send_message_body(&request).map_err(WorldSmsError::Encode)?;
        self.post_send(&self.base_url, body).await
    }

    /// Send a message through the debit endpoint.
    ///
    /// Same contract as [`WorldSmsClient::send_message`], against the debit host.
    pub async fn send_debit_message(
        &self,
        request: SendDebitMessage,
    ) -> Result<SendOutcome, WorldSmsError> {
        let body =
            crate::transport::encode_send_debit_body(&request).map_err(WorldSmsError::Encode)?;
        self.post_send(&self.debit_base_url, body).await
    }

    async fn post_send(&self, base_url: &Url, body: String) -> Result<SendOutcome, WorldSmsError> {
        let url = endpoint(base_url, SEND_SMS_PATH);
        self.debug(|| format!("{LOG_PREFIX} requesting url: {url}"));
        self.debug(|| format!("{LOG_PREFIX} request body: {body}"));

        let request = HttpRequest {
            url: url.into(),
            headers: self.headers(),
            body,
        };
        let response = self
            .http
            .post_json(request)
            .await
            .map_err(WorldSmsError::Transport)?;

        let response = check_status(response)?;
        self.debug(|| format!("{LOG_PREFIX} response body: {}", response.body));

        if response.body.trim().is_empty() {
            return Ok(SendOutcome {
                response: None,
                http: response,
            });
        }

        match crate::transport::decode_send_message_response(&response.body) {
            Ok(decoded) => Ok(SendOutcome {
                response: Some(decoded),
                http: response,
            }),
            Err(err) => Err(WorldSmsError::Decode {
                source: Box::new(err),
                response,
            }),
        }
    }

    fn headers(&self) -> Vec<(String, String)> {
        vec![
            ("Content-Type".to_owned(), "application/json".to_owned()),
            ("Accept".to_owned(), "application/json".to_owned()),
            (
                "Authorization".to_owned(),
                format!("Basic {}", self.api_key.as_str()),
            ),
        ]
    }

    fn debug(&self, line: impl FnOnce() -> String) {
        if let Some(logger) = &self.logger {
            logger.log(&line());
        }
    }
}

impl fmt::Debug for WorldSmsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorldSmsClient")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url.as_str())
            .field("debit_base_url", &self.debit_base_url.as_str())
            .field("logger", &self.logger)
            .finish_non_exhaustive()
    }
}

fn parse_base_url(field: &'static str, input: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        field,
        input: input.to_owned(),
        reason,
    };

    let url = Url::parse(input.trim()).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }
    Ok(url)
}

fn endpoint(base_url: &Url, path: &str) -> Url {
    let mut url = base_url.clone();
    let joined = format!("{}{}", base_url.path().trim_end_matches('/'), path);
    url.set_path(&joined);
    url
}

fn check_status(response: HttpResponse) -> Result<HttpResponse, WorldSmsError> {
    match response.status {
        200 | 204 => Ok(response),
        500 => {
            tracing::warn!(status = response.status, "gateway returned internal server error");
            Err(WorldSmsError::Server { response })
        }
        status => {
            tracing::debug!(status, "gateway returned unexpected HTTP status");
            Err(WorldSmsError::Api { response })
        }
    }
}
