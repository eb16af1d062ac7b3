//! Blocking, typed client for the Emby media server HTTP API.
//!
//! # Overview
//! [`EmbyClient`] owns the base URL, the API key and a persistent transport.
//! Endpoint modules ([`SystemApi`], [`ItemsApi`], [`UsersApi`]) borrow it,
//! flatten typed requests into wire-named query parameters, and decode JSON
//! or text bodies into typed responses.
//!
//! # Design
//! - Every call goes through [`EmbyClient::dispatch`], which turns 401/403
//!   into [`ApiError::Authentication`], other non-2xx statuses into
//!   [`ApiError::HttpStatus`] and transport failures into
//!   [`ApiError::Transport`]. No retries.
//! - The network sits behind the [`Transport`] trait; [`UreqTransport`] is the
//!   default, tests substitute their own.
//! - Logical `snake_case` names map to wire `PascalCase` through
//!   [`naming`]; irregular wire names are serde renames on the field.
//! - Endpoints that signal "nothing available" with 204 return `Option`.

pub mod api;
pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod http;
pub mod naming;
pub mod types;

#[cfg(test)]
mod testing;

pub use api::{ItemsApi, SystemApi, UsersApi};
pub use client::EmbyClient;
pub use config::ClientConfig;
pub use error::{ApiError, ErrorKind, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use types::{
    BaseItemDto, EndPointInfo, GetItemsRequest, InstallationInfo, LogPage, PackageVersionClass,
    PackageVersionInfo, PublicSystemInfo, QueryResult, SystemInfo, UserDto, UserItemDataDto,
    WakeOnLanInfo,
};
