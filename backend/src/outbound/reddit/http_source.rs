//! Reqwest-backed Reddit source adapter.
//!
//! This adapter owns transport details only: OAuth2 password-grant token
//! handling, request serialisation, HTTP error mapping, and JSON decoding
//! into domain records.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tokio::sync::Mutex;

use super::dto::{AccessTokenDto, ThingDto};
use crate::config::RedditCredentials;
use crate::domain::ports::{CommentSource, CommentSourceError};
use crate::domain::{Comment, Submission};

const DEFAULT_AUTH_BASE: &str = "https://www.reddit.com/";
const DEFAULT_API_BASE: &str = "https://oauth.reddit.com/";
const TOKEN_PATH: &str = "api/v1/access_token";

/// Tokens are refreshed this long before their reported expiry.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

/// Reddit source adapter performing authenticated JSON API requests.
///
/// One instance is shared across requests for the lifetime of the process;
/// its only interior state is the cached bearer token.
pub struct RedditHttpSource {
    client: Client,
    credentials: RedditCredentials,
    auth_base: Url,
    api_base: Url,
    token: Mutex<Option<CachedToken>>,
}

impl RedditHttpSource {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout. The credentials' user agent is sent on every request.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn new(
        credentials: RedditCredentials,
        timeout: Duration,
    ) -> Result<Self, CommentSourceError> {
        Self::with_endpoints(credentials, timeout, DEFAULT_AUTH_BASE, DEFAULT_API_BASE)
    }

    /// Build an adapter against explicit auth and API endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed or an
    /// endpoint fails to parse.
    pub fn with_endpoints(
        credentials: RedditCredentials,
        timeout: Duration,
        auth_base: &str,
        api_base: &str,
    ) -> Result<Self, CommentSourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(credentials.user_agent.clone())
            .build()
            .map_err(|error| CommentSourceError::transport(error.to_string()))?;
        Ok(Self {
            client,
            credentials,
            auth_base: parse_endpoint(auth_base)?,
            api_base: parse_endpoint(api_base)?,
            token: Mutex::new(None),
        })
    }

    /// Return the cached bearer token, fetching a fresh one when absent or
    /// close to expiry.
    async fn bearer_token(&self) -> Result<String, CommentSourceError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.expires_at {
                return Ok(token.access_token.clone());
            }
        }

        let fresh = self.fetch_token().await?;
        let access_token = fresh.access_token.clone();
        *cached = Some(fresh);
        Ok(access_token)
    }

    async fn fetch_token(&self) -> Result<CachedToken, CommentSourceError> {
        let url = join_endpoint(&self.auth_base, TOKEN_PATH)?;
        let response = self
            .client
            .post(url)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[
                ("grant_type", "password"),
                ("username", self.credentials.username.as_str()),
                ("password", self.credentials.password.as_str()),
            ])
            .send()
            .await
            .map_err(map_transport_error)?;
        let body = read_success_body(response).await?;

        let decoded: AccessTokenDto = serde_json::from_slice(&body).map_err(|error| {
            CommentSourceError::decode(format!("invalid access token payload: {error}"))
        })?;
        if let Some(error) = decoded.error {
            return Err(CommentSourceError::auth(error));
        }
        if decoded.access_token.is_empty() {
            return Err(CommentSourceError::auth("token response carried no token"));
        }

        Ok(CachedToken {
            access_token: decoded.access_token,
            expires_at: Instant::now() + expiry_window(decoded.expires_in),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, CommentSourceError> {
        let token = self.bearer_token().await?;
        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(map_transport_error)?;
        let body = read_success_body(response).await?;
        serde_json::from_slice(&body).map_err(|error| {
            CommentSourceError::decode(format!("invalid listing payload: {error}"))
        })
    }
}

#[async_trait]
impl CommentSource for RedditHttpSource {
    async fn search_submissions(
        &self,
        subreddit: &str,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Submission>, CommentSourceError> {
        let community = subreddit.trim();
        if community.is_empty() {
            return Err(CommentSourceError::invalid_request(
                "subreddit must not be empty",
            ));
        }

        let url = join_endpoint(&self.api_base, &format!("r/{community}/search"))?;
        let limit_param = limit.to_string();
        let listing: ThingDto = self
            .get_json(
                url,
                &[
                    ("q", query),
                    ("restrict_sr", "1"),
                    ("limit", limit_param.as_str()),
                    ("raw_json", "1"),
                ],
            )
            .await?;
        Ok(listing.into_submissions())
    }

    async fn submission_comments(
        &self,
        submission_id: &str,
        limit: u32,
    ) -> Result<Vec<Comment>, CommentSourceError> {
        let url = join_endpoint(&self.api_base, &format!("comments/{submission_id}"))?;
        let limit_param = limit.to_string();
        // The payload is a two-element array: the submission listing, then
        // the comment listing.
        let listings: Vec<ThingDto> = self
            .get_json(
                url,
                &[("limit", limit_param.as_str()), ("raw_json", "1")],
            )
            .await?;
        let comment_listing = listings.into_iter().nth(1).ok_or_else(|| {
            CommentSourceError::decode("comments payload missing the comment listing")
        })?;
        Ok(comment_listing.into_comments())
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, CommentSourceError> {
    Url::parse(raw)
        .map_err(|error| CommentSourceError::invalid_request(format!("invalid endpoint {raw}: {error}")))
}

fn join_endpoint(base: &Url, path: &str) -> Result<Url, CommentSourceError> {
    base.join(path).map_err(|error| {
        CommentSourceError::invalid_request(format!("invalid request path {path}: {error}"))
    })
}

fn expiry_window(expires_in: u64) -> Duration {
    Duration::from_secs(expires_in).saturating_sub(TOKEN_EXPIRY_MARGIN)
}

async fn read_success_body(response: reqwest::Response) -> Result<Vec<u8>, CommentSourceError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        return Err(map_status_error(status, body.as_ref()));
    }
    Ok(body.to_vec())
}

fn map_transport_error(error: reqwest::Error) -> CommentSourceError {
    if error.is_timeout() {
        CommentSourceError::timeout(error.to_string())
    } else {
        CommentSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> CommentSourceError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CommentSourceError::auth(message),
        StatusCode::TOO_MANY_REQUESTS => CommentSourceError::rate_limited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            CommentSourceError::timeout(message)
        }
        _ if status.is_client_error() => CommentSourceError::invalid_request(message),
        _ => CommentSourceError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
