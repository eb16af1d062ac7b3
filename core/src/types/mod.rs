//! Request and response shapes for the Emby API.
//!
//! # Design
//! Response fields the server may leave out are `Option`s, so a missing
//! field is distinguishable from a zero or `false`. Required fields are
//! plain values and make decoding fail when absent. Unknown wire fields are
//! ignored. Wire names come from `rename_all` on each struct, with explicit
//! `rename` overrides where the server deviates from its own convention.

mod common;
mod items;
mod system;
mod users;

pub use common::{PackageVersionClass, QueryResult};
pub use items::{BaseItemDto, GetItemsRequest, UserItemDataDto};
pub use system::{
    EndPointInfo, InstallationInfo, LogPage, PackageVersionInfo, PublicSystemInfo, SystemInfo,
    WakeOnLanInfo,
};
pub use users::UserDto;
