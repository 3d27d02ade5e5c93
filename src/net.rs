//! Public IP address lookup.
//!
//! Asks a list of plain-text "what is my IP" services in order and returns the first usable
//! answer. There is no retry or backoff: each endpoint is tried once.
//!
//! Only success (2xx) responses are read. A non-empty body on an error status, such as a
//! proxy's error page, is not taken as an address and the next endpoint is asked instead.

use core::fmt;
use core::time::Duration;
use log::{debug, warn};
use reqwest::Client;

/// Endpoints queried by default, in order.
pub const DEFAULT_ENDPOINTS: [&str; 2] = ["https://api.ipify.org", "https://ifconfig.me/ip"];

/// Base of the human-readable details page for an address.
const IP_DETAILS_BASE: &str = "https://whatismyipaddress.com/ip/";

/// Errors from [`PublicIpLookup`].
#[derive(Debug)]
pub enum LookupError {
    /// The HTTP client could not be built.
    Client(reqwest::Error),
    /// No endpoint returned a usable address.
    Exhausted {
        /// Number of endpoints tried.
        attempted: usize,
    },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client(err) => write!(f, "failed to build HTTP client: {err}"),
            Self::Exhausted { attempted } => {
                write!(f, "no public IP from any of {attempted} endpoint(s)")
            }
        }
    }
}

impl std::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Client(err) => Some(err),
            Self::Exhausted { .. } => None,
        }
    }
}

/// Settings for [`PublicIpLookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// Endpoints returning the caller's address as a plain-text body, tried in order.
    pub endpoints: Vec<String>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header sent with each request.
    pub user_agent: String,
    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` style environment settings.
    pub system_proxy: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoints: DEFAULT_ENDPOINTS.iter().map(|&e| e.to_owned()).collect(),
            timeout: Duration::from_secs(10),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_owned(),
            system_proxy: true,
        }
    }
}

/// Fetches the public address of this machine.
///
/// # Example
/// ```no_run
/// # async fn run() -> Result<(), noaa_sun::net::LookupError> {
/// use noaa_sun::net::{LookupConfig, PublicIpLookup};
///
/// let lookup = PublicIpLookup::new(LookupConfig::default())?;
/// let ip = lookup.fetch().await?;
/// println!("public IP: {ip}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PublicIpLookup {
    client: Client,
    endpoints: Vec<String>,
}

impl PublicIpLookup {
    /// Builds the HTTP client for the given settings.
    ///
    /// # Errors
    /// Returns `LookupError::Client` if the TLS backend or client cannot be initialized.
    pub fn new(config: LookupConfig) -> Result<Self, LookupError> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent);
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(LookupError::Client)?;

        Ok(Self {
            client,
            endpoints: config.endpoints,
        })
    }

    /// Gets the configured endpoints.
    #[must_use]
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// Queries the endpoints in order and returns the first non-empty answer.
    ///
    /// The response body is trimmed of surrounding whitespace. Transport errors, non-success
    /// statuses and blank bodies move on to the next endpoint.
    ///
    /// # Errors
    /// Returns `LookupError::Exhausted` if no endpoint produced an address.
    pub async fn fetch(&self) -> Result<String, LookupError> {
        for endpoint in &self.endpoints {
            match self.fetch_one(endpoint).await {
                Ok(Some(ip)) => {
                    debug!("public IP {ip} from {endpoint}");
                    return Ok(ip);
                }
                Ok(None) => debug!("empty response from {endpoint}"),
                Err(err) => debug!("request to {endpoint} failed: {err}"),
            }
        }

        warn!(
            "public IP lookup failed on all {} endpoint(s)",
            self.endpoints.len()
        );
        Err(LookupError::Exhausted {
            attempted: self.endpoints.len(),
        })
    }

    async fn fetch_one(&self, endpoint: &str) -> Result<Option<String>, reqwest::Error> {
        let body = self
            .client
            .get(endpoint)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(parse_body(&body))
    }
}

/// Extracts the address from a plain-text response body.
fn parse_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Link to a details page for `ip`; `None` while no address is known.
///
/// # Example
/// ```
/// use noaa_sun::net::ip_details_url;
///
/// assert_eq!(
///     ip_details_url("203.0.113.7").as_deref(),
///     Some("https://whatismyipaddress.com/ip/203.0.113.7")
/// );
/// assert_eq!(ip_details_url("—"), None);
/// ```
#[must_use]
pub fn ip_details_url(ip: &str) -> Option<String> {
    let ip = ip.trim();
    if ip.is_empty() || ip == crate::display::PLACEHOLDER {
        return None;
    }
    Some(format!("{IP_DETAILS_BASE}{ip}"))
}
