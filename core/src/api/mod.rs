//! Endpoint modules, one per resource group.
//!
//! Each module borrows the [`EmbyClient`](crate::EmbyClient), builds a path
//! and query pairs, dispatches, and decodes the body.

mod items;
mod system;
mod users;

pub use items::ItemsApi;
pub use system::SystemApi;
pub use users::UsersApi;
