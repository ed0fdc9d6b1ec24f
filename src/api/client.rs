use crate::api::url::CENSUS_BASE_URL;
use crate::error::RequestError;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("census-metadata/", env!("CARGO_PKG_VERSION"));

/// Synchronous client for the Census Bureau API. One GET per call, no
/// shared state across calls beyond the connection pool.
#[derive(Debug, Clone)]
pub struct CensusClient {
    http: Client,
    base_url: String,
}

impl CensusClient {
    /// Create a client pointed at the public Census Bureau API.
    pub fn new() -> Result<Self, RequestError> {
        Self::with_base_url(CENSUS_BASE_URL)
    }

    /// Create a client against an alternate base URL (test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, RequestError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RequestError::ClientInit {
                message: e.to_string(),
            })?;

        Ok(CensusClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform a GET and map the response per status code:
    /// 200/201/202 parse as JSON, 204 downgrades to an informational log
    /// line and `None`, everything else is a request failure carrying the
    /// status and the offending URL.
    pub(crate) fn get_json(&self, url: &str) -> Result<Option<Value>, RequestError> {
        log::debug!("GET {}", url);

        let response = self.http.get(url).send().map_err(|e| RequestError::Failed {
            status: 0,
            url: url.to_string(),
            message: format!("The request could not be sent: {}.", e),
        })?;

        let status = response.status().as_u16();
        match status {
            200 | 201 | 202 => {
                let payload = response
                    .json::<Value>()
                    .map_err(|e| RequestError::ParseBody {
                        url: url.to_string(),
                        message: e.to_string(),
                    })?;
                Ok(Some(payload))
            }
            204 => {
                log::info!(
                    "{} - {} The url used for the call was: {}.",
                    status,
                    status_text(status),
                    url
                );
                Ok(None)
            }
            _ => Err(RequestError::Failed {
                status,
                url: url.to_string(),
                message: status_text(status),
            }),
        }
    }
}

/// Human-readable text for the status codes the API is known to return.
fn status_text(code: u16) -> String {
    match code {
        204 => "The request was processed successfully, but there is no data to return.",
        400 => "Your request is incorrectly formatted and could not be processed.",
        404 => "The requested resource could not be found.",
        _ => "An unknown error occurred.",
    }
    .to_string()
}
