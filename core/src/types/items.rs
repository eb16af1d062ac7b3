use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Filters and paging for the item query endpoints.
///
/// Field names are logical; [`encode_query`](crate::codec::encode_query)
/// turns them into wire names. Unset fields are never sent. Multi-value
/// filters are plain strings in the delimiter the server documents for that
/// parameter (comma for types, ids and fields, pipe for names such as
/// artists, genres and studios).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetItemsRequest {
    // Paging and ordering
    pub start_index: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,

    // Scope
    pub recursive: Option<bool>,
    pub parent_id: Option<String>,
    pub ids: Option<String>,
    pub exclude_item_ids: Option<String>,
    pub include_item_types: Option<String>,
    pub exclude_item_types: Option<String>,
    pub media_types: Option<String>,
    pub user_id: Option<String>,
    pub path: Option<String>,
    pub fields: Option<String>,
    pub project_to_media: Option<bool>,
    pub group_items_into_collections: Option<bool>,

    // Text
    pub search_term: Option<String>,
    pub name_starts_with: Option<String>,
    pub name_starts_with_or_greater: Option<String>,
    pub name_less_than: Option<String>,
    pub artist_starts_with_or_greater: Option<String>,
    pub album_artist_starts_with_or_greater: Option<String>,

    // People, music and metadata
    pub artists: Option<String>,
    pub artist_ids: Option<String>,
    pub artist_type: Option<String>,
    pub albums: Option<String>,
    pub person: Option<String>,
    pub person_ids: Option<String>,
    pub person_types: Option<String>,
    pub studios: Option<String>,
    pub studio_ids: Option<String>,
    pub genres: Option<String>,
    pub tags: Option<String>,
    pub exclude_tags: Option<String>,
    pub years: Option<String>,
    pub official_ratings: Option<String>,
    pub min_official_rating: Option<String>,
    pub max_official_rating: Option<String>,
    pub min_community_rating: Option<f64>,
    pub min_critic_rating: Option<f64>,
    pub any_provider_id_equals: Option<String>,
    pub series_status: Option<String>,

    // Dates
    pub min_premiere_date: Option<String>,
    pub max_premiere_date: Option<String>,
    pub min_date_last_saved: Option<String>,
    pub min_date_last_saved_for_user: Option<String>,
    pub min_start_date: Option<String>,
    pub max_start_date: Option<String>,
    pub min_end_date: Option<String>,
    pub max_end_date: Option<String>,

    // Episodes
    pub parent_index_number: Option<i32>,
    pub min_index_number: Option<i32>,
    pub aired_during_season: Option<i32>,
    pub adjacent_to: Option<String>,

    // Boolean filters
    pub filters: Option<String>,
    pub is_played: Option<bool>,
    pub is_favorite: Option<bool>,
    pub is_folder: Option<bool>,
    pub is_movie: Option<bool>,
    pub is_series: Option<bool>,
    pub is_news: Option<bool>,
    pub is_kids: Option<bool>,
    pub is_sports: Option<bool>,
    pub is_new: Option<bool>,
    pub is_premiere: Option<bool>,
    pub is_new_or_premiere: Option<bool>,
    pub is_repeat: Option<bool>,
    pub is_unaired: Option<bool>,
    pub is_locked: Option<bool>,
    pub is_place_holder: Option<bool>,
    #[serde(rename = "IsHD")]
    pub is_hd: Option<bool>,
    #[serde(rename = "Is3D")]
    pub is_3d: Option<bool>,
    #[serde(rename = "Is4K")]
    pub is_4k: Option<bool>,
    pub has_overview: Option<bool>,
    pub has_imdb_id: Option<bool>,
    pub has_tmdb_id: Option<bool>,
    pub has_tvdb_id: Option<bool>,
    pub has_theme_song: Option<bool>,
    pub has_theme_video: Option<bool>,
    pub has_subtitles: Option<bool>,
    pub has_special_feature: Option<bool>,
    pub has_trailer: Option<bool>,
    pub has_parental_rating: Option<bool>,
    pub has_official_rating: Option<bool>,

    // Media streams
    pub video_types: Option<String>,
    pub containers: Option<String>,
    pub audio_codecs: Option<String>,
    pub audio_layouts: Option<String>,
    pub video_codecs: Option<String>,
    pub extended_video_types: Option<String>,
    pub subtitle_codecs: Option<String>,

    // Response shaping
    pub enable_images: Option<bool>,
    pub enable_user_data: Option<bool>,
    pub image_type_limit: Option<i32>,
    pub enable_image_types: Option<String>,
    pub image_types: Option<String>,
}

/// An item in the library: folder, album, track, movie, episode, ...
///
/// Only `Id` is guaranteed by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BaseItemDto {
    pub id: String,
    pub name: Option<String>,
    pub original_title: Option<String>,
    pub server_id: Option<String>,
    pub etag: Option<String>,
    pub prefix: Option<String>,
    #[serde(rename = "Type")]
    pub item_type: Option<String>,
    pub media_type: Option<String>,
    pub is_folder: Option<bool>,
    pub parent_id: Option<String>,
    pub path: Option<String>,
    pub container: Option<String>,
    pub sort_name: Option<String>,
    pub forced_sort_name: Option<String>,
    pub date_created: Option<String>,
    pub premiere_date: Option<String>,
    pub end_date: Option<String>,
    pub production_year: Option<i32>,
    pub overview: Option<String>,
    pub taglines: Option<Vec<String>>,
    pub genres: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub official_rating: Option<String>,
    pub community_rating: Option<f64>,
    pub critic_rating: Option<f64>,
    pub run_time_ticks: Option<i64>,
    pub index_number: Option<i32>,
    pub parent_index_number: Option<i32>,
    pub child_count: Option<i32>,
    pub recursive_item_count: Option<i32>,
    pub album: Option<String>,
    pub album_id: Option<String>,
    pub album_artist: Option<String>,
    pub artists: Option<Vec<String>>,
    pub series_name: Option<String>,
    pub series_id: Option<String>,
    pub season_name: Option<String>,
    pub season_id: Option<String>,
    pub status: Option<String>,
    pub can_delete: Option<bool>,
    pub can_download: Option<bool>,
    pub supports_sync: Option<bool>,
    pub user_data: Option<UserItemDataDto>,
    pub image_tags: Option<HashMap<String, String>>,
    pub provider_ids: Option<HashMap<String, String>>,
}

/// Per-user playback state of an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct UserItemDataDto {
    pub rating: Option<f64>,
    pub played_percentage: Option<f64>,
    pub unplayed_item_count: Option<i32>,
    pub playback_position_ticks: Option<i64>,
    pub play_count: Option<i32>,
    pub is_favorite: Option<bool>,
    pub last_played_date: Option<String>,
    pub played: Option<bool>,
    pub key: Option<String>,
}
