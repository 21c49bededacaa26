//! Portal API client.
//!
//! Handles login and bearer-token requests against the portal. The token is
//! obtained lazily on the first authenticated call and reused afterwards.

use std::sync::Mutex;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{ACCEPT_LANGUAGE, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{AccountConfig, ApiConfig};
use crate::utils::http;

/// `code` the portal returns on success.
pub const SUCCESS_CODE: i64 = 2000;

const LOGIN_ENDPOINT: &str = "/auth/login";
const USER_ENDPOINT: &str = "/auth/user";
const MISSING: &str = "获取失败";
const LOG_TARGET: &str = "zxin::client";

/// Standard portal response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub code: Option<i64>,

    #[serde(default)]
    pub msg: String,

    pub data: Option<T>,
}

#[derive(Debug, Clone, Deserialize)]
struct LoginData {
    token: String,
}

/// Profile of the logged-in student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserInfo {
    pub username: String,
    pub nickname: String,
    pub email: String,
    pub college: String,
    pub classroom: String,
    pub grade: String,
}

impl UserInfo {
    /// Extract the profile from `/auth/user` data, tolerating missing fields.
    pub fn from_data(data: &Value) -> Self {
        let text = |v: Option<&Value>| match v {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => MISSING.to_string(),
        };
        let student = data.get("student").and_then(|s| s.get(0));

        Self {
            username: text(data.get("username")),
            nickname: text(data.get("nickname")),
            email: text(data.get("email")),
            college: text(data.get("college").and_then(|c| c.get("name"))),
            classroom: text(
                student
                    .and_then(|s| s.get("joinedClassrooms"))
                    .and_then(|c| c.get(0))
                    .and_then(|c| c.get("name")),
            ),
            grade: text(student.and_then(|s| s.get("grade"))),
        }
    }
}

/// Authenticated client for the portal API.
pub struct PortalClient {
    base_url: Url,
    accept_language: String,
    account: AccountConfig,
    http: reqwest::Client,
    token: Mutex<Option<String>>,
    log_target: String,
}

impl PortalClient {
    /// Create a client; no request is made until the first call.
    pub fn new(api: &ApiConfig, account: AccountConfig) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(&api.base_url)?,
            accept_language: api.accept_language.clone(),
            account,
            http: http::create_client(api)?,
            token: Mutex::new(None),
            log_target: LOG_TARGET.to_string(),
        })
    }

    pub fn with_log_target(mut self, target: impl Into<String>) -> Self {
        self.log_target = target.into();
        self
    }

    /// Reuse a token obtained elsewhere.
    pub fn with_token(self, token: impl Into<String>) -> Self {
        self.set_token(Some(token.into()));
        self
    }

    fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    fn current_token(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_token(&self, token: Option<String>) {
        *self
            .token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = token;
    }

    /// Log in with base64-encoded credentials and store the token.
    pub async fn login(&self) -> Result<String> {
        if self.account.username.is_empty() || self.account.password.is_empty() {
            return Err(AppError::auth("username or password not configured"));
        }

        let (username, password) = encode_credentials(&self.account);
        let response: ApiResponse<LoginData> = self
            .http
            .post(self.url(LOGIN_ENDPOINT)?)
            .form(&[("username", username), ("password", password)])
            .send()
            .await?
            .json()
            .await?;

        match (response.code, response.data) {
            (Some(SUCCESS_CODE), Some(data)) => {
                log::info!(target: self.log_target.as_str(), "Login succeeded");
                self.set_token(Some(data.token.clone()));
                Ok(data.token)
            }
            _ => {
                log::error!(
                    target: self.log_target.as_str(),
                    "Login failed: {}",
                    response.msg
                );
                Err(AppError::auth(response.msg))
            }
        }
    }

    async fn token(&self) -> Result<String> {
        match self.current_token() {
            Some(token) => Ok(token),
            None => self.login().await,
        }
    }

    /// GET an endpoint with the bearer token and decode the JSON body.
    ///
    /// Logs in first when no token is held.
    pub async fn api_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let token = self.token().await?;
        let url = self.url(endpoint)?;
        log::debug!(target: self.log_target.as_str(), "GET {}", url);

        let body = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(ACCEPT_LANGUAGE, &self.accept_language)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body)
    }

    /// Fetch the logged-in user's profile.
    pub async fn user_info(&self) -> Result<UserInfo> {
        let response: ApiResponse<Value> = self.api_request(USER_ENDPOINT).await?;
        match (response.code, response.data) {
            (Some(SUCCESS_CODE), Some(data)) => Ok(UserInfo::from_data(&data)),
            _ => Err(AppError::fetch(format!(
                "user info request failed: {}",
                response.msg
            ))),
        }
    }
}

/// The portal expects both credentials base64-encoded.
pub fn encode_credentials(account: &AccountConfig) -> (String, String) {
    (
        STANDARD.encode(account.username.as_bytes()),
        STANDARD.encode(account.password.as_bytes()),
    )
}
