//! REST client for a realtime-database style JSON tree.
//!
//! Each user record lives at `{base_url}/{key}.json`. Reading an absent
//! path returns HTTP 200 with a `null` body, which maps to `None`.

use crate::{Result as StoreResult, StoreError, UserStore};

use msg_config::StoreConfig;
use msg_core::{RecordBody, UserKey};

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, Response, Url};
use serde_json::Value;

/// Characters the database refuses in a path segment. `.` is removed by
/// key normalization already.
const FORBIDDEN_KEY_CHARS: [char; 5] = ['$', '#', '[', ']', '/'];

pub struct RealtimeDbStore {
    base_url: Url,
    auth_token: Option<String>,
    client: ReqwestClient,
}

impl RealtimeDbStore {
    /// Create a client without a request timeout.
    ///
    /// # Arguments
    /// * `base_url` - Tree root (e.g., "https://<project>.firebaseio.com/users")
    /// * `auth_token` - Optional secret sent as the `auth` query parameter
    pub fn new(base_url: &str, auth_token: Option<&str>) -> StoreResult<Self> {
        Self::with_client(base_url, auth_token, ReqwestClient::new())
    }

    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .ok_or_else(|| StoreError::configuration("store.base_url is not set"))?;

        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Self::with_client(base_url, config.auth_token.as_deref(), builder.build()?)
    }

    fn with_client(
        base_url: &str,
        auth_token: Option<&str>,
        client: ReqwestClient,
    ) -> StoreResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            StoreError::configuration(format!("invalid store.base_url '{base_url}': {e}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(StoreError::configuration(format!(
                "store.base_url '{base_url}' cannot carry a path"
            )));
        }

        Ok(Self {
            base_url,
            auth_token: auth_token.map(String::from),
            client,
        })
    }

    /// Full URL for a record, query included.
    pub fn record_url(&self, key: &UserKey) -> StoreResult<Url> {
        validate_key(key)?;

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::configuration("store.base_url cannot carry a path"))?
            .pop_if_empty()
            .push(&format!("{}.json", key.as_str()));

        if let Some(ref token) = self.auth_token {
            url.query_pairs_mut().append_pair("auth", token);
        }

        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        key: &UserKey,
        body: Option<&RecordBody>,
    ) -> StoreResult<Response> {
        let url = self.record_url(key)?;
        debug!("{} {}", method, redact(&url));

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::status(status.as_u16(), body));
        }

        Ok(response)
    }
}

#[async_trait]
impl UserStore for RealtimeDbStore {
    async fn get(&self, key: &UserKey) -> StoreResult<Option<Value>> {
        let response = self.send(Method::GET, key, None).await?;
        let value: Value = response.json().await?;

        Ok(match value {
            Value::Null => None,
            other => Some(other),
        })
    }

    async fn put(&self, key: &UserKey, body: &RecordBody) -> StoreResult<()> {
        self.send(Method::PUT, key, Some(body)).await?;
        Ok(())
    }
}

fn validate_key(key: &UserKey) -> StoreResult<()> {
    let raw = key.as_str();

    if raw.is_empty() {
        return Err(StoreError::invalid_key(raw, "key is empty"));
    }
    if let Some(c) = raw
        .chars()
        .find(|c| FORBIDDEN_KEY_CHARS.contains(c) || c.is_ascii_control())
    {
        return Err(StoreError::invalid_key(
            raw,
            format!("contains forbidden character {c:?}"),
        ));
    }

    Ok(())
}

/// URL for logging, without the auth token.
fn redact(url: &Url) -> String {
    let mut shown = url.clone();
    shown.set_query(None);
    shown.to_string()
}
