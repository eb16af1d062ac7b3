use crate::client::EmbyClient;
use crate::codec::{encode_query, path_segment};
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, Transport};
use crate::types::{
    EndPointInfo, LogPage, PackageVersionInfo, PublicSystemInfo, QueryResult, SystemInfo,
    WakeOnLanInfo,
};

/// `/System/*` endpoints.
pub struct SystemApi<'a, T> {
    client: &'a EmbyClient<T>,
}

impl<'a, T: Transport> SystemApi<'a, T> {
    pub(crate) fn new(client: &'a EmbyClient<T>) -> Self {
        Self { client }
    }

    /// `GET /System/Ping`. The server answers with its product name.
    pub fn ping(&self) -> Result<String> {
        self.client.get_text("/System/Ping")
    }

    /// `HEAD /System/Ping`, a lightweight liveness check.
    ///
    /// `true` only for 200. Any other status, rejected ones included, yields
    /// `false`; transport failures are still returned as errors.
    pub fn ping_head(&self) -> Result<bool> {
        match self.client.dispatch(HttpMethod::Head, "/System/Ping", &[], None) {
            Ok(response) => Ok(response.status == 200),
            Err(ApiError::Authentication { .. } | ApiError::HttpStatus { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// `POST /System/Ping`.
    pub fn ping_post(&self) -> Result<String> {
        Ok(self
            .client
            .dispatch(HttpMethod::Post, "/System/Ping", &[], None)?
            .body)
    }

    /// `GET /System/Endpoint`.
    pub fn endpoint(&self) -> Result<EndPointInfo> {
        self.client.get_json("/System/Endpoint", &[])
    }

    /// `GET /System/Info`. Requires an API key with admin rights.
    pub fn info(&self) -> Result<SystemInfo> {
        self.client.get_json("/System/Info", &[])
    }

    /// `GET /System/Info/Public`.
    pub fn info_public(&self) -> Result<PublicSystemInfo> {
        self.client.get_json("/System/Info/Public", &[])
    }

    /// `GET /System/Logs/{name}`: the raw log file.
    pub fn log(&self, name: &str) -> Result<String> {
        self.client
            .get_text(&format!("/System/Logs/{}", path_segment(name)))
    }

    /// `GET /System/Logs/{name}/Lines`.
    pub fn log_lines(&self, name: &str, page: &LogPage) -> Result<QueryResult<String>> {
        let query = encode_query(page)?;
        let path = format!("/System/Logs/{}/Lines", path_segment(name));
        self.client.get_json(&path, &query)
    }

    /// `GET /System/Logs/Query`: names of the available log files.
    pub fn logs_query(&self, page: &LogPage) -> Result<QueryResult<String>> {
        let query = encode_query(page)?;
        self.client.get_json("/System/Logs/Query", &query)
    }

    /// `GET /System/ReleaseNotes`. `None` when the server has none (204).
    pub fn release_notes(&self) -> Result<Option<PackageVersionInfo>> {
        self.client.get_optional_json("/System/ReleaseNotes")
    }

    /// `GET /System/ReleaseNotes/Versions`. `None` on 204.
    pub fn release_note_versions(&self) -> Result<Option<Vec<PackageVersionInfo>>> {
        self.client.get_optional_json("/System/ReleaseNotes/Versions")
    }

    /// `GET /System/WakeOnLanInfo`. `None` on 204.
    pub fn wake_on_lan_info(&self) -> Result<Option<Vec<WakeOnLanInfo>>> {
        self.client.get_optional_json("/System/WakeOnLanInfo")
    }

    /// `POST /System/Restart`. Any 2xx status means the request was accepted.
    pub fn restart(&self) -> Result<()> {
        self.client
            .dispatch(HttpMethod::Post, "/System/Restart", &[], None)
            .map(drop)
    }

    /// `POST /System/Shutdown`. Any 2xx status means the request was accepted.
    pub fn shutdown(&self) -> Result<()> {
        self.client
            .dispatch(HttpMethod::Post, "/System/Shutdown", &[], None)
            .map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{client, pair, sorted_query, StubTransport, BASE_URL};

    #[test]
    fn ping_returns_text() {
        let stub = StubTransport::respond(200, "Emby Server");
        assert_eq!(client(&stub).system().ping().unwrap(), "Emby Server");
        let req = stub.last_request();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, format!("{BASE_URL}/System/Ping"));
    }

    #[test]
    fn ping_post_returns_text() {
        let stub = StubTransport::respond(200, "Emby Server");
        assert_eq!(client(&stub).system().ping_post().unwrap(), "Emby Server");
        assert_eq!(stub.last_request().method, HttpMethod::Post);
    }

    #[test]
    fn ping_head_true_on_200() {
        let stub = StubTransport::respond(200, "");
        assert!(client(&stub).system().ping_head().unwrap());
        assert_eq!(stub.last_request().method, HttpMethod::Head);
    }

    #[test]
    fn ping_head_false_on_other_statuses() {
        for status in [204, 401, 404, 503] {
            let stub = StubTransport::respond(status, "");
            assert!(!client(&stub).system().ping_head().unwrap(), "{status}");
        }
    }

    #[test]
    fn ping_head_propagates_transport_errors() {
        let stub = StubTransport::fail("timed out");
        let err = client(&stub).system().ping_head().unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn endpoint_decodes() {
        let stub = StubTransport::respond(200, r#"{"IsLocal":true,"IsInNetwork":true}"#);
        let info = client(&stub).system().endpoint().unwrap();
        assert_eq!(info.is_local, Some(true));
        assert_eq!(info.is_in_network, Some(true));
    }

    #[test]
    fn endpoint_unauthorized() {
        let stub = StubTransport::respond(401, "Unauthorized");
        let err = client(&stub).system().endpoint().unwrap_err();
        assert!(matches!(err, ApiError::Authentication { .. }));
        assert!(err.to_string().contains("Authentication failed"));
    }

    #[test]
    fn log_interpolates_name() {
        let stub = StubTransport::respond(200, "2026-02-21 21:00:00.000 Info Main: Test Log Line...");
        let text = client(&stub).system().log("embyserver.txt").unwrap();
        assert!(text.contains("Test Log Line..."));
        assert_eq!(
            stub.last_request().path,
            format!("{BASE_URL}/System/Logs/embyserver.txt")
        );
    }

    #[test]
    fn log_name_is_percent_encoded() {
        let stub = StubTransport::respond(200, "");
        stub.push(200, r#"{"Items":[],"TotalRecordCount":0}"#);
        let c = client(&stub);
        c.system().log("my log.txt").unwrap();
        c.system().log_lines("a/b.txt", &LogPage::default()).unwrap();

        let requests = stub.requests();
        assert_eq!(requests[0].path, format!("{BASE_URL}/System/Logs/my%20log.txt"));
        assert_eq!(requests[1].path, format!("{BASE_URL}/System/Logs/a%2Fb.txt/Lines"));
    }

    #[test]
    fn restart_accepts_any_success_status() {
        for status in [200, 204] {
            let stub = StubTransport::respond(status, "");
            client(&stub).system().restart().unwrap();
            assert_eq!(stub.last_request().path, format!("{BASE_URL}/System/Restart"));
        }
    }

    #[test]
    fn log_lines_sends_default_pagination() {
        let stub = StubTransport::respond(
            200,
            r#"{"Items":["Line 1","Line 2"],"TotalRecordCount":2}"#,
        );
        let lines = client(&stub)
            .system()
            .log_lines("embyserver.txt", &LogPage::default())
            .unwrap();
        assert_eq!(lines.total_record_count, 2);
        assert_eq!(lines.items, vec!["Line 1", "Line 2"]);

        let req = stub.last_request();
        assert_eq!(req.path, format!("{BASE_URL}/System/Logs/embyserver.txt/Lines"));
        assert_eq!(
            sorted_query(&req),
            vec![pair("Limit", "100"), pair("StartIndex", "0")]
        );
    }

    #[test]
    fn logs_query_sends_custom_pagination() {
        let stub = StubTransport::respond(200, r#"{"Items":[],"TotalRecordCount":0}"#);
        let page = LogPage {
            start_index: 20,
            limit: 10,
        };
        let result = client(&stub).system().logs_query(&page).unwrap();
        assert!(result.items.is_empty());
        assert_eq!(
            sorted_query(&stub.last_request()),
            vec![pair("Limit", "10"), pair("StartIndex", "20")]
        );
    }

    #[test]
    fn release_notes_no_content_is_none() {
        let stub = StubTransport::respond(204, "");
        assert!(client(&stub).system().release_notes().unwrap().is_none());
    }

    #[test]
    fn release_notes_decodes() {
        let stub = StubTransport::respond(
            200,
            r#"{"versionStr":"1.0.0","description":"Initial Release"}"#,
        );
        let notes = client(&stub).system().release_notes().unwrap().unwrap();
        assert_eq!(notes.version_str.as_deref(), Some("1.0.0"));
        assert_eq!(notes.description.as_deref(), Some("Initial Release"));
    }

    #[test]
    fn release_note_versions_preserve_order() {
        let stub = StubTransport::respond(
            200,
            r#"[{"name":"1.0.0-Beta","versionStr":"1.0.0","classification":"Beta"},
                {"name":"0.9.0","versionStr":"0.9.0","classification":{"classification":"Release"}},
                {"name":"0.8.0","versionStr":"0.8.0"}]"#,
        );
        let versions = client(&stub)
            .system()
            .release_note_versions()
            .unwrap()
            .unwrap();
        assert_eq!(versions.len(), 3);
        assert_eq!(versions[0].name.as_deref(), Some("1.0.0-Beta"));
        assert_eq!(versions[0].classification.as_ref().unwrap(), &"Beta");
        assert_eq!(versions[1].classification.as_ref().unwrap(), &"Release");
        assert!(versions[2].classification.is_none());
    }

    #[test]
    fn release_note_versions_no_content() {
        let stub = StubTransport::respond(204, "");
        assert!(client(&stub)
            .system()
            .release_note_versions()
            .unwrap()
            .is_none());
    }

    #[test]
    fn wake_on_lan_info_decodes() {
        let stub = StubTransport::respond(
            200,
            r#"[{"MacAddress":"0A0A0A0A0A0A","BroadcastAddress":"255.255.255.255","Port":9}]"#,
        );
        let info = client(&stub).system().wake_on_lan_info().unwrap().unwrap();
        assert_eq!(info.len(), 1);
        assert_eq!(info[0].mac_address.as_deref(), Some("0A0A0A0A0A0A"));
        assert_eq!(info[0].broadcast_address.as_deref(), Some("255.255.255.255"));
        assert_eq!(info[0].port, Some(9));
    }

    #[test]
    fn restart_and_shutdown_post() {
        let stub = StubTransport::default();
        stub.push(204, "");
        stub.push(200, "");
        let c = client(&stub);
        c.system().restart().unwrap();
        c.system().shutdown().unwrap();

        let requests = stub.requests();
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].path, format!("{BASE_URL}/System/Restart"));
        assert_eq!(requests[1].path, format!("{BASE_URL}/System/Shutdown"));
    }

    #[test]
    fn restart_failure_is_an_error() {
        let stub = StubTransport::respond(500, "");
        assert!(matches!(
            client(&stub).system().restart(),
            Err(ApiError::HttpStatus { status: 500, .. })
        ));
    }

    #[test]
    fn info_bad_payload_is_deserialization_error() {
        let stub = StubTransport::respond(200, r#"{"HttpServerPortNumber":"eighty"}"#);
        let err = client(&stub).system().info().unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
