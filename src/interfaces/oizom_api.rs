use std::env;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::constants::{defaults, envvars};
use crate::data_mgmt::models::ReadingKind;

const GRANT_TYPE: &str = "client_credentials";
const OAUTH_SCOPE: &str = "view_data";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("environment variable '{0}' is not set")]
    MissingCredential(&'static str),
    #[error("token request failed with status code {0}")]
    TokenStatus(u16),
    #[error("token request failed: {0}")]
    Transport(ureq::Error),
    #[error("could not parse token response: {0}")]
    TokenParse(#[from] std::io::Error),
    #[error(transparent)]
    Tls(#[from] native_tls::Error),
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'a str,
    scope: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn from_env() -> Result<Self, ApiError> {
        let client_id = env_var_either(envvars::CLIENT_ID, envvars::CLIENT_ID_ALT)
            .ok_or(ApiError::MissingCredential(envvars::CLIENT_ID))?;
        let client_secret = env_var_either(envvars::CLIENT_SECRET, envvars::CLIENT_SECRET_ALT)
            .ok_or(ApiError::MissingCredential(envvars::CLIENT_SECRET))?;
        Ok(Self {
            client_id,
            client_secret,
        })
    }
}

// The two historical fetch scripts disagreed on the casing of the credential
// variables; accept both, lowercase first. Empty values count as unset.
fn env_var_either(name: &str, alt_name: &str) -> Option<String> {
    non_empty_env_var(name).or_else(|| non_empty_env_var(alt_name))
}

fn non_empty_env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

pub fn api_base_url() -> String {
    env::var(envvars::API_BASE_URL).unwrap_or_else(|_| defaults::API_BASE_URL.to_string())
}

/// Authenticated client for the sensor-data API.
///
/// The underlying agent is built once and reused for every request in the
/// run; pooled connections are released when the client is dropped.
pub struct ApiClient {
    agent: ureq::Agent,
    base_url: String,
    client_id: String,
    access_token: String,
    retry_delay: Duration,
}

impl ApiClient {
    /// Exchange client credentials for a bearer token.
    ///
    /// A single attempt; any non-200 response is fatal for the whole run.
    pub fn authenticate(base_url: &str, credentials: &Credentials) -> Result<Self, ApiError> {
        let agent = build_agent()?;
        let token_url = format!("{base_url}/oauth2/token");

        log::debug!("Requesting access token from {token_url}");
        let request = TokenRequest {
            client_id: &credentials.client_id,
            client_secret: &credentials.client_secret,
            grant_type: GRANT_TYPE,
            scope: OAUTH_SCOPE,
        };
        let response = match agent.post(&token_url).send_json(&request) {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => {
                log::error!("Token request failed with status code {code}");
                return Err(ApiError::TokenStatus(code));
            }
            Err(e) => return Err(ApiError::Transport(e)),
        };
        let token: TokenResponse = response.into_json()?;

        Ok(Self {
            agent,
            base_url: base_url.to_string(),
            client_id: credentials.client_id.clone(),
            access_token: token.access_token,
            retry_delay: defaults::RATE_LIMIT_RETRY_DELAY,
        })
    }

    /// Fetch one reading for one device.
    ///
    /// Rate-limited requests are retried up to `MAX_FETCH_ATTEMPTS` total
    /// attempts with a fixed delay in between; any other failure abandons
    /// the pair after a single request. Failures are logged, never
    /// propagated: a `None` simply contributes nothing to the output.
    pub fn fetch_reading(&self, device_id: &str, kind: ReadingKind) -> Option<Value> {
        let url = format!(
            "{}/data/{}/{}",
            self.base_url,
            kind.path_segment(),
            device_id
        );
        let bearer = format!("Bearer {}", self.access_token);

        let mut attempts = 0;
        while attempts < defaults::MAX_FETCH_ATTEMPTS {
            let response = self
                .agent
                .get(&url)
                .set("Authorization", &bearer)
                .set("ClientId", &self.client_id)
                .set("Content-Type", "application/json")
                .call();

            match response {
                Ok(response) => match response.into_json::<Value>() {
                    Ok(payload) => {
                        log::info!("Fetched {} data for sensor {}", kind.label(), device_id);
                        return Some(payload);
                    }
                    Err(e) => {
                        log::warn!(
                            "Could not parse {} data for sensor {}: {}",
                            kind.label(),
                            device_id,
                            e
                        );
                        return None;
                    }
                },
                Err(ureq::Error::Status(429, _)) => {
                    log::warn!(
                        "Rate limited for sensor {} ({}); retrying",
                        device_id,
                        kind.label()
                    );
                    thread::sleep(self.retry_delay);
                    attempts += 1;
                }
                Err(ureq::Error::Status(code, _)) => {
                    log::warn!(
                        "Data request for sensor {} ({}) failed with status code {}",
                        device_id,
                        kind.label(),
                        code
                    );
                    return None;
                }
                Err(e) => {
                    log::warn!(
                        "Data request for sensor {} ({}) failed: {}",
                        device_id,
                        kind.label(),
                        e
                    );
                    return None;
                }
            }
        }

        log::warn!(
            "Giving up on sensor {} ({}) after {} rate-limited attempts",
            device_id,
            kind.label(),
            defaults::MAX_FETCH_ATTEMPTS
        );
        None
    }
}

fn build_agent() -> Result<ureq::Agent, ApiError> {
    Ok(ureq::AgentBuilder::new()
        .tls_connector(Arc::new(native_tls::TlsConnector::new()?))
        .timeout(defaults::API_REQUEST_TIMEOUT)
        .build())
}
