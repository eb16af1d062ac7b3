//! In-memory imitation of the Emby endpoints the client covers.
//!
//! Public routes answer without a token; everything else requires the
//! `X-Emby-Token` header to match the configured key and otherwise answers
//! `401 Unauthorized`.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::warn;
use uuid::Uuid;

pub const TOKEN_HEADER: &str = "x-emby-token";
pub const PRODUCT_NAME: &str = "Emby Server";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(rename = "Type")]
    pub item_type: String,
    pub is_folder: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub artists: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub has_password: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseNote {
    pub name: String,
    pub version_str: String,
    pub classification: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WakeOnLanDevice {
    pub mac_address: String,
    pub broadcast_address: String,
    pub port: u16,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_record_count: usize,
}

/// Everything the mock serves. Immutable once the app is built.
#[derive(Clone, Debug, Default)]
pub struct Library {
    pub api_key: String,
    pub server_id: String,
    pub server_name: String,
    pub version: String,
    pub users: Vec<User>,
    pub items: Vec<Item>,
    /// Item ids with saved playback progress, per user id.
    pub resume: HashMap<String, Vec<String>>,
    /// Log file name to its lines.
    pub logs: Vec<(String, Vec<String>)>,
    pub release_notes: Option<ReleaseNote>,
    pub release_versions: Vec<ReleaseNote>,
    pub wake_on_lan: Vec<WakeOnLanDevice>,
}

impl Library {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            server_id: Uuid::new_v4().simple().to_string(),
            server_name: "mock".to_string(),
            version: "4.8.10.0".to_string(),
            ..Default::default()
        }
    }

    /// A small music and movie library with two users.
    pub fn demo(api_key: &str) -> Self {
        let item = |id: &str, name: &str, kind: &str, parent: Option<&str>, artists: &[&str]| Item {
            id: id.to_string(),
            name: name.to_string(),
            item_type: kind.to_string(),
            is_folder: matches!(kind, "CollectionFolder" | "MusicAlbum" | "Folder"),
            parent_id: parent.map(str::to_string),
            artists: artists.iter().map(|a| a.to_string()).collect(),
        };
        let note = |name: &str, version: &str, class: &str, description: &str| ReleaseNote {
            name: name.to_string(),
            version_str: version.to_string(),
            classification: class.to_string(),
            description: description.to_string(),
        };

        Self {
            users: vec![
                User {
                    id: "1".to_string(),
                    name: "admin".to_string(),
                    has_password: true,
                },
                User {
                    id: "2".to_string(),
                    name: "guest".to_string(),
                    has_password: false,
                },
            ],
            items: vec![
                item("100", "Music", "CollectionFolder", None, &[]),
                item("101", "Movies", "CollectionFolder", None, &[]),
                item("12345", "Bad", "MusicAlbum", Some("100"), &["Michael Jackson"]),
                item("12346", "Thriller", "MusicAlbum", Some("100"), &["Michael Jackson"]),
                item("12347", "Smooth Criminal", "Audio", Some("12345"), &["Michael Jackson"]),
                item("12348", "Discovery", "MusicAlbum", Some("100"), &["Daft Punk"]),
                item("20001", "Heat", "Movie", Some("101"), &[]),
                item("20002", "Ronin", "Movie", Some("101"), &[]),
            ],
            resume: HashMap::from([("1".to_string(), vec!["20001".to_string()])]),
            logs: vec![
                (
                    "embyserver.txt".to_string(),
                    (1..=5)
                        .map(|n| format!("2026-02-21 21:00:0{n}.000 Info Main: Line {n}"))
                        .collect(),
                ),
                (
                    "ffmpeg-transcode.txt".to_string(),
                    vec!["ffmpeg version 5.1".to_string()],
                ),
            ],
            release_notes: Some(note("4.8.10.0", "4.8.10.0", "Release", "Stability fixes")),
            release_versions: vec![
                note("4.9.0.1-Beta", "4.9.0.1", "Beta", "New player"),
                note("4.8.10.0", "4.8.10.0", "Release", "Stability fixes"),
            ],
            wake_on_lan: vec![WakeOnLanDevice {
                mac_address: "0A0A0A0A0A0A".to_string(),
                broadcast_address: "255.255.255.255".to_string(),
                port: 9,
            }],
            ..Self::new(api_key)
        }
    }
}

#[derive(Debug, Default)]
struct Flags {
    pending_restart: bool,
    shutting_down: bool,
}

#[derive(Clone)]
pub struct AppState {
    library: Arc<Library>,
    flags: Arc<RwLock<Flags>>,
}

pub fn app(library: Library) -> Router {
    let state = AppState {
        library: Arc::new(library),
        flags: Arc::new(RwLock::new(Flags::default())),
    };

    let protected = Router::new()
        .route("/System/Endpoint", get(endpoint))
        .route("/System/Info", get(system_info))
        .route("/System/Logs/Query", get(logs_query))
        .route("/System/Logs/{name}", get(log_file))
        .route("/System/Logs/{name}/Lines", get(log_lines))
        .route("/System/ReleaseNotes", get(release_notes))
        .route("/System/ReleaseNotes/Versions", get(release_versions))
        .route("/System/WakeOnLanInfo", get(wake_on_lan))
        .route("/System/Restart", post(restart))
        .route("/System/Shutdown", post(shutdown))
        .route("/Items", get(items))
        .route("/Users/{id}/Items", get(user_items))
        .route("/Users/{id}/Items/Resume", get(user_resume))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token));

    Router::new()
        .route("/System/Ping", get(ping).post(ping))
        .route("/System/Info/Public", get(public_info))
        .route("/Users/Public", get(public_users))
        .merge(protected)
        .with_state(state)
}

pub async fn run(listener: TcpListener, library: Library) -> Result<(), std::io::Error> {
    axum::serve(listener, app(library)).await
}

async fn require_token(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let token = request
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());
    if token == Some(state.library.api_key.as_str()) {
        return next.run(request).await;
    }
    warn!(path = %request.uri().path(), "rejected request with missing or wrong token");
    (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
}

async fn ping() -> &'static str {
    PRODUCT_NAME
}

async fn public_info(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(public_info_json(&state.library))
}

fn public_info_json(library: &Library) -> serde_json::Value {
    serde_json::json!({
        "LocalAddress": "http://127.0.0.1:8096",
        "LocalAddresses": ["http://127.0.0.1:8096"],
        "WanAddress": "",
        "RemoteAddresses": [],
        "ServerName": library.server_name,
        "Version": library.version,
        "Id": library.server_id,
    })
}

async fn system_info(State(state): State<AppState>) -> Json<serde_json::Value> {
    let flags = state.flags.read().await;
    let mut info = public_info_json(&state.library);
    let extra = serde_json::json!({
        "SystemUpdateLevel": "Release",
        "OperatingSystem": "Linux",
        "OperatingSystemDisplayName": "Linux",
        "HasPendingRestart": flags.pending_restart,
        "IsShuttingDown": flags.shutting_down,
        "CanSelfRestart": true,
        "HttpServerPortNumber": 8096,
        "SupportsHttps": false,
        "CompletedInstallations": [
            { "Id": "1", "Name": "Installation", "Version": "1.0.0", "UpdateClass": "Release", "PercentComplete": 100.0 }
        ],
        "WakeOnLanInfo": state.library.wake_on_lan,
    });
    if let (Some(info), serde_json::Value::Object(extra)) = (info.as_object_mut(), extra) {
        info.extend(extra);
    }
    Json(info)
}

async fn endpoint() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "IsLocal": true, "IsInNetwork": true }))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageParams {
    pub start_index: Option<usize>,
    pub limit: Option<usize>,
}

fn paginate<T: Clone>(all: &[T], params: &PageParams) -> Page<T> {
    let start = params.start_index.unwrap_or(0);
    let limit = params.limit.unwrap_or(usize::MAX);
    Page {
        items: all.iter().skip(start).take(limit).cloned().collect(),
        total_record_count: all.len(),
    }
}

async fn log_file(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<String, StatusCode> {
    find_log(&state.library, &name)
        .map(|lines| lines.join("\n"))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn log_lines(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<String>>, StatusCode> {
    let lines = find_log(&state.library, &name).ok_or(StatusCode::NOT_FOUND)?;
    // The real server returns nothing unless both paging parameters are present.
    if params.start_index.is_none() || params.limit.is_none() {
        return Ok(Json(Page {
            items: Vec::new(),
            total_record_count: 0,
        }));
    }
    Ok(Json(paginate(lines, &params)))
}

async fn logs_query(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Json<Page<String>> {
    let names: Vec<String> = state.library.logs.iter().map(|(n, _)| n.clone()).collect();
    Json(paginate(&names, &params))
}

fn find_log<'a>(library: &'a Library, name: &str) -> Option<&'a [String]> {
    library
        .logs
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, lines)| lines.as_slice())
}

async fn release_notes(State(state): State<AppState>) -> Response {
    match &state.library.release_notes {
        Some(note) => Json(note.clone()).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn release_versions(State(state): State<AppState>) -> Response {
    if state.library.release_versions.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }
    Json(state.library.release_versions.clone()).into_response()
}

async fn wake_on_lan(State(state): State<AppState>) -> Response {
    if state.library.wake_on_lan.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }
    Json(state.library.wake_on_lan.clone()).into_response()
}

async fn restart(State(state): State<AppState>) -> StatusCode {
    state.flags.write().await.pending_restart = true;
    StatusCode::NO_CONTENT
}

async fn shutdown(State(state): State<AppState>) -> StatusCode {
    state.flags.write().await.shutting_down = true;
    StatusCode::NO_CONTENT
}

async fn public_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.library.users.clone())
}

/// Apply the item filters the mock understands.
///
/// `IncludeItemTypes` is comma-delimited and `Artists` pipe-delimited, as on
/// the real server. Without `Recursive=true` only direct children of
/// `ParentId` (or top-level folders) are considered; with it the whole
/// library is searched.
pub fn filter_items<'a>(
    items: impl Iterator<Item = &'a Item>,
    params: &HashMap<String, String>,
) -> Page<Item> {
    let flag = |key: &str| params.get(key).map(|v| v.eq_ignore_ascii_case("true"));
    let recursive = flag("Recursive").unwrap_or(false);
    let is_folder = flag("IsFolder");
    let parent = params.get("ParentId");
    let types: Option<Vec<&str>> = params
        .get("IncludeItemTypes")
        .map(|v| v.split(',').map(str::trim).collect());
    let artists: Option<Vec<&str>> = params
        .get("Artists")
        .map(|v| v.split('|').map(str::trim).collect());
    let search = params.get("SearchTerm").map(|s| s.to_lowercase());

    let matched: Vec<Item> = items
        .filter(|item| match (parent, recursive) {
            (Some(parent), false) => item.parent_id.as_ref() == Some(parent),
            (None, false) => item.parent_id.is_none(),
            (_, true) => true,
        })
        .filter(|item| types.as_ref().map_or(true, |t| t.contains(&item.item_type.as_str())))
        .filter(|item| {
            artists
                .as_ref()
                .map_or(true, |a| item.artists.iter().any(|artist| a.contains(&artist.as_str())))
        })
        .filter(|item| {
            search
                .as_ref()
                .map_or(true, |s| item.name.to_lowercase().contains(s.as_str()))
        })
        .filter(|item| is_folder.map_or(true, |f| item.is_folder == f))
        .cloned()
        .collect();

    let page = PageParams {
        start_index: params.get("StartIndex").and_then(|v| v.parse().ok()),
        limit: params.get("Limit").and_then(|v| v.parse().ok()),
    };
    paginate(&matched, &page)
}

async fn items(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Page<Item>> {
    Json(filter_items(state.library.items.iter(), &params))
}

async fn user_items(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Page<Item>>, StatusCode> {
    if !state.library.users.iter().any(|u| u.id == id) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(filter_items(state.library.items.iter(), &params)))
}

async fn user_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(mut params): Query<HashMap<String, String>>,
) -> Result<Json<Page<Item>>, StatusCode> {
    if !state.library.users.iter().any(|u| u.id == id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let resume = state.library.resume.get(&id).cloned().unwrap_or_default();
    params
        .entry("Recursive".to_string())
        .or_insert_with(|| "true".to_string());
    let candidates = state
        .library
        .items
        .iter()
        .filter(|item| resume.contains(&item.id));
    Ok(Json(filter_items(candidates, &params)))
}
