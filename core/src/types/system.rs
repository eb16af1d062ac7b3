use serde::{Deserialize, Serialize};

use super::common::PackageVersionClass;

/// Pagination for the log endpoints.
///
/// The server documents both parameters as optional but answers with an
/// empty page when they are missing, so they are always sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogPage {
    pub start_index: u32,
    pub limit: u32,
}

impl Default for LogPage {
    fn default() -> Self {
        Self {
            start_index: 0,
            limit: 100,
        }
    }
}

/// Where the caller sits relative to the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct EndPointInfo {
    pub is_local: Option<bool>,
    pub is_in_network: Option<bool>,
}

/// Unauthenticated subset of [`SystemInfo`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PublicSystemInfo {
    pub local_address: Option<String>,
    pub local_addresses: Option<Vec<String>>,
    pub wan_address: Option<String>,
    pub remote_addresses: Option<Vec<String>>,
    pub server_name: Option<String>,
    pub version: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SystemInfo {
    pub system_update_level: Option<PackageVersionClass>,
    pub operating_system_display_name: Option<String>,
    pub package_name: Option<String>,
    pub has_pending_restart: Option<bool>,
    pub is_shutting_down: Option<bool>,
    pub operating_system: Option<String>,
    pub supports_library_monitor: Option<bool>,
    pub supports_local_port_configuration: Option<bool>,
    pub supports_wake_server: Option<bool>,
    pub web_socket_port_number: Option<u16>,
    pub completed_installations: Option<Vec<InstallationInfo>>,
    pub can_self_restart: Option<bool>,
    pub can_self_update: Option<bool>,
    pub can_launch_web_browser: Option<bool>,
    pub program_data_path: Option<String>,
    pub items_by_name_path: Option<String>,
    pub cache_path: Option<String>,
    pub log_path: Option<String>,
    pub internal_metadata_path: Option<String>,
    pub transcoding_temp_path: Option<String>,
    pub http_server_port_number: Option<u16>,
    pub supports_https: Option<bool>,
    pub https_port_number: Option<u16>,
    pub has_update_available: Option<bool>,
    pub supports_auto_run_at_startup: Option<bool>,
    pub hardware_acceleration_requires_premiere: Option<bool>,
    pub wake_on_lan_info: Option<Vec<WakeOnLanInfo>>,
    pub is_in_maintenance_mode: Option<bool>,
    pub local_address: Option<String>,
    pub local_addresses: Option<Vec<String>>,
    pub wan_address: Option<String>,
    pub remote_addresses: Option<Vec<String>>,
    pub server_name: Option<String>,
    pub version: Option<String>,
    pub id: Option<String>,
}

/// A plugin or update installation the server has completed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct InstallationInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    pub assembly_guid: Option<String>,
    pub version: Option<String>,
    pub update_class: Option<PackageVersionClass>,
    pub percent_complete: Option<f64>,
}

/// A release of the server package. Spelled in camelCase on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageVersionInfo {
    pub name: Option<String>,
    pub guid: Option<String>,
    pub version_str: Option<String>,
    pub classification: Option<PackageVersionClass>,
    pub description: Option<String>,
    pub required_version_str: Option<String>,
    pub source_url: Option<String>,
    pub checksum: Option<String>,
    pub target_filename: Option<String>,
    pub info_url: Option<String>,
    pub runtimes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct WakeOnLanInfo {
    pub mac_address: Option<String>,
    pub broadcast_address: Option<String>,
    pub port: Option<u16>,
}
