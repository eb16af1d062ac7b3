use crate::client::EmbyClient;
use crate::codec::{encode_query, path_segment};
use crate::error::Result;
use crate::http::Transport;
use crate::types::{BaseItemDto, GetItemsRequest, QueryResult};

/// Item query endpoints.
pub struct ItemsApi<'a, T> {
    client: &'a EmbyClient<T>,
}

impl<'a, T: Transport> ItemsApi<'a, T> {
    pub(crate) fn new(client: &'a EmbyClient<T>) -> Self {
        Self { client }
    }

    /// `GET /Items`.
    pub fn items(&self, query: &GetItemsRequest) -> Result<QueryResult<BaseItemDto>> {
        self.fetch("/Items", query)
    }

    /// `GET /Users/{user_id}/Items`: items visible to one user.
    pub fn user_items(
        &self,
        user_id: &str,
        query: &GetItemsRequest,
    ) -> Result<QueryResult<BaseItemDto>> {
        self.fetch(&format!("/Users/{}/Items", path_segment(user_id)), query)
    }

    /// `GET /Users/{user_id}/Items/Resume`: the user's "continue watching" list.
    pub fn user_resume_items(
        &self,
        user_id: &str,
        query: &GetItemsRequest,
    ) -> Result<QueryResult<BaseItemDto>> {
        self.fetch(&format!("/Users/{}/Items/Resume", path_segment(user_id)), query)
    }

    fn fetch(&self, path: &str, query: &GetItemsRequest) -> Result<QueryResult<BaseItemDto>> {
        let params = encode_query(query)?;
        self.client.get_json(path, &params)
    }
}
