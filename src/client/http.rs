use super::port::*;
use crate::api::{CheckUserRequest, CheckUserResponse, ErrorBody};
use crate::logger::*;
use reqwest::{Client, StatusCode};
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Lookup service reached over HTTP.
pub struct HttpLookupApi {
    client: Client,
    endpoint: String,
}

impl HttpLookupApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}/check_user", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl LookupApi for HttpLookupApi {
    async fn check_user(&self, username: &str) -> Result<LookupReply, TransportError> {
        let request = CheckUserRequest {
            username: username.to_owned(),
        };
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        debug!(%status, bytes = body.len(), "lookup response");
        Ok(interpret(status, &body))
    }
}

pub fn interpret(status: StatusCode, body: &[u8]) -> LookupReply {
    if !status.is_success() {
        return LookupReply::Failed {
            message: server_message(body),
        };
    }

    match serde_json::from_slice::<CheckUserResponse>(body) {
        Ok(CheckUserResponse {
            exists: true,
            link: Some(link),
        }) if !link.trim().is_empty() => LookupReply::Found { link },
        Ok(CheckUserResponse { exists: false, .. }) => LookupReply::NotFound,
        Ok(_) => LookupReply::Failed {
            message: server_message(body),
        },
        Err(e) => {
            debug!("malformed lookup response: {}", e);
            LookupReply::Failed {
                message: server_message(body),
            }
        }
    }
}

fn server_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}
