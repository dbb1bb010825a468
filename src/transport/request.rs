//! Immutable description of one API request.

use crate::config::Config;
use crate::error::AppError;
use crate::session::RedditSession;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use url::Url;
use url::form_urlencoded::Serializer;

/// A request to one API endpoint: method, path and string parameters.
///
/// Parameters render as the percent-encoded query string for GET requests and
/// as a form-encoded body for POST requests. The description itself carries no
/// credentials; the bearer token is attached at build time from the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    params: Vec<(String, String)>,
}

impl ApiRequest {
    /// GET request for the given path.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// POST request for the given path.
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Appends one parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Appends a batch of parameters, preserving their order.
    pub fn with_params(mut self, params: impl IntoIterator<Item = (String, String)>) -> Self {
        self.params.extend(params);
        self
    }

    /// HTTP method of this request.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Endpoint path of this request.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Value of a parameter, if present.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All parameters in insertion order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Full request URL against the given endpoint root.
    ///
    /// GET parameters become the encoded query string; POST parameters do not
    /// appear in the URL.
    pub fn url(&self, base_url: &str) -> Result<Url, AppError> {
        let base = Url::parse(base_url)?;
        let mut url = base.join(&self.path)?;
        if self.method == Method::GET && !self.params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Form-encoded body for POST requests with parameters.
    pub fn form_body(&self) -> Option<String> {
        if self.method != Method::POST || self.params.is_empty() {
            return None;
        }
        let mut serializer = Serializer::new(String::new());
        for (key, value) in &self.params {
            serializer.append_pair(key, value);
        }
        Some(serializer.finish())
    }

    /// Builds the dispatchable request: URL, bearer token, user agent and,
    /// for POST, the form body.
    pub fn into_http_request(
        self,
        http: &reqwest::Client,
        config: &Config,
        session: &RedditSession,
    ) -> Result<reqwest::Request, AppError> {
        let url = self.url(&config.base_url)?;
        let mut builder = http
            .request(self.method.clone(), url)
            .header(AUTHORIZATION, format!("bearer {}", session.access_token()))
            .header(USER_AGENT, config.user_agent.as_str());
        if let Some(body) = self.form_body() {
            builder = builder
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(body);
        }
        builder.build().map_err(AppError::from)
    }
}
