use http::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors at the booking-backend boundary. No retry, no caching; callers map
/// these onto `ServerFnError` at the server-fn edge.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("BOOKING_API_URL is not set")]
    MissingBaseUrl,
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("backend returned {status} for {path}")]
    Status { path: String, status: StatusCode },
    #[error("invalid response body from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Thin REST client for the external booking backend. The base URL and the
/// optional bearer token are injected through the environment, never decided
/// here.
pub struct BookingApi {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl BookingApi {
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = std::env::var("BOOKING_API_URL").map_err(|_| ApiError::MissingBaseUrl)?;
        Ok(Self::new(base_url, std::env::var("BOOKING_API_TOKEN").ok()))
    }

    pub fn new(base_url: String, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client: reqwest::Client::new(),
        }
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let mut request = self.client.get(format!("{}{}", self.base_url, path));
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status,
            });
        }

        response.json().await.map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }

    /// POSTs `body` as JSON. The response body is not inspected beyond the
    /// status code.
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self
            .authorize(self.client.post(format!("{}{}", self.base_url, path)))
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status,
            });
        }

        Ok(())
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}
