use serde::Serialize;

use crate::client::EmbyClient;
use crate::codec::encode_query;
use crate::error::Result;
use crate::http::Transport;
use crate::types::UserDto;

/// `/Users/*` endpoints.
pub struct UsersApi<'a, T> {
    client: &'a EmbyClient<T>,
}

impl<'a, T: Transport> UsersApi<'a, T> {
    pub(crate) fn new(client: &'a EmbyClient<T>) -> Self {
        Self { client }
    }

    /// `GET /Users/Public`: accounts shown on the login screen.
    pub fn public_users(&self) -> Result<Vec<UserDto>> {
        self.client.get_json("/Users/Public", &[])
    }

    /// `GET /Users/Public` with extra query parameters. `query` is any
    /// struct or map; keys are sent in wire case and unset values dropped.
    pub fn public_users_with<Q: Serialize + ?Sized>(&self, query: &Q) -> Result<Vec<UserDto>> {
        let params = encode_query(query)?;
        self.client.get_json("/Users/Public", &params)
    }
}
