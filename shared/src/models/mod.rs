//! Data models shared by the server and its clients

pub mod member;
pub mod serde_helpers;
pub mod validation;

pub use member::{Member, MemberCreate, MemberPatch, MemberReplace, NewMember};
pub use validation::{DEFAULT_STATUS, is_valid_phone};
