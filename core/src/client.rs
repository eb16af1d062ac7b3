//! The dispatcher every endpoint call goes through.
//!
//! # Design
//! `EmbyClient` owns the normalized base URL, the API key and the transport.
//! Endpoint modules borrow it and only build paths and query pairs; status
//! interpretation lives in one place, [`EmbyClient::dispatch`]. Each call is
//! a single attempt with no retry.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::{ItemsApi, SystemApi, UsersApi};
use crate::codec;
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};

pub const TOKEN_HEADER: &str = "X-Emby-Token";

/// Blocking client for the Emby server API.
///
/// The transport (and with it the connection pool) is acquired in the
/// constructor and released when the client is closed or dropped.
///
/// ```no_run
/// use emby_core::{ClientConfig, EmbyClient, GetItemsRequest};
///
/// let client = EmbyClient::new(ClientConfig::new("http://192.168.1.111:8096/", "api-key"))?;
/// let found = client.items().items(&GetItemsRequest {
///     recursive: Some(true),
///     artists: Some("Michael Jackson".to_string()),
///     ..Default::default()
/// })?;
/// for item in found.items.iter().filter(|i| i.item_type.as_deref() == Some("MusicAlbum")) {
///     println!("{}", item.name.as_deref().unwrap_or_default());
/// }
/// client.close();
/// # Ok::<(), emby_core::ApiError>(())
/// ```
pub struct EmbyClient<T = UreqTransport> {
    base_url: String,
    api_key: String,
    transport: T,
}

impl<T: std::fmt::Debug> std::fmt::Debug for EmbyClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbyClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("transport", &self.transport)
            .finish()
    }
}

impl EmbyClient<UreqTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let config = config.validate()?;
        let transport = UreqTransport::new(config.timeout);
        Ok(Self {
            base_url: config.base_url,
            api_key: config.api_key,
            transport,
        })
    }
}

impl<T: Transport> EmbyClient<T> {
    /// Build a client over a caller-supplied transport. The config timeout is
    /// the transport's concern and is not applied here.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        let config = config.validate()?;
        Ok(Self {
            base_url: config.base_url,
            api_key: config.api_key,
            transport,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn system(&self) -> SystemApi<'_, T> {
        SystemApi::new(self)
    }

    pub fn items(&self) -> ItemsApi<'_, T> {
        ItemsApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_, T> {
        UsersApi::new(self)
    }

    /// Release the transport.
    pub fn close(self) {
        debug!(base_url = %self.base_url, "closing client");
    }

    /// Send one request and translate its status.
    ///
    /// `path` is relative to the base URL and starts with `/`. A 2xx response
    /// is returned untouched; 401/403 become [`ApiError::Authentication`],
    /// other statuses [`ApiError::HttpStatus`], and transport failures
    /// [`ApiError::Transport`].
    pub fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(String, String)],
        body: Option<String>,
    ) -> Result<HttpResponse> {
        let request = HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            query: query.to_vec(),
            headers: vec![
                ("Accept".to_string(), "application/json".to_string()),
                (TOKEN_HEADER.to_string(), self.api_key.clone()),
            ],
            body,
        };

        debug!(method = method.as_str(), path, params = query.len(), "dispatching request");
        let response = self.transport.execute(request).map_err(ApiError::Transport)?;
        debug!(method = method.as_str(), path, status = response.status, "received response");

        check_status(response)
    }

    pub(crate) fn get_text(&self, path: &str) -> Result<String> {
        Ok(self.dispatch(HttpMethod::Get, path, &[], None)?.body)
    }

    pub(crate) fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<R> {
        let response = self.dispatch(HttpMethod::Get, path, query, None)?;
        codec::decode_json(&response)
    }

    pub(crate) fn get_optional_json<R: DeserializeOwned>(&self, path: &str) -> Result<Option<R>> {
        let response = self.dispatch(HttpMethod::Get, path, &[], None)?;
        codec::decode_optional(&response)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: HttpResponse) -> Result<HttpResponse> {
    if response.is_success() {
        return Ok(response);
    }
    if matches!(response.status, 401 | 403) {
        return Err(ApiError::Authentication {
            status: response.status,
            body: response.body,
        });
    }
    Err(ApiError::HttpStatus {
        status: response.status,
        body: response.body,
    })
}
