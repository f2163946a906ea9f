//! Member Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::serde_helpers::double_option;
use super::validation::{
    default_status, validate_full_name, validate_phone_number, validate_status,
};

/// Member entity (会员)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    #[validate(
        custom(function = "validate_full_name"),
        length(max = 100, message = "fullName must be at most 100 characters")
    )]
    pub full_name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: Option<String>,
    pub date_of_birth: NaiveDate,
    #[validate(custom(function = "validate_status"))]
    pub status: String,
}

/// Storage input for a member that has no id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub date_of_birth: NaiveDate,
    pub status: String,
}

impl NewMember {
    /// Attach the id assigned by storage
    pub fn into_member(self, id: i64) -> Member {
        Member {
            id,
            full_name: self.full_name,
            email: self.email,
            phone_number: self.phone_number,
            date_of_birth: self.date_of_birth,
            status: self.status,
        }
    }
}

/// Create member payload (POST)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MemberCreate {
    #[validate(
        custom(function = "validate_full_name"),
        length(max = 100, message = "fullName must be at most 100 characters")
    )]
    pub full_name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(custom(function = "validate_phone_number"))]
    #[serde(default)]
    pub phone_number: Option<String>,
    pub date_of_birth: NaiveDate,
    #[validate(custom(function = "validate_status"))]
    #[serde(default = "default_status")]
    pub status: String,
}

impl From<MemberCreate> for NewMember {
    fn from(data: MemberCreate) -> Self {
        Self {
            full_name: data.full_name,
            email: data.email,
            phone_number: data.phone_number,
            date_of_birth: data.date_of_birth,
            status: data.status,
        }
    }
}

/// Full replace payload (PUT)
///
/// Every mutable field is overwritten; an absent `phoneNumber` clears it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MemberReplace {
    #[validate(
        custom(function = "validate_full_name"),
        length(max = 100, message = "fullName must be at most 100 characters")
    )]
    pub full_name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(custom(function = "validate_phone_number"))]
    #[serde(default)]
    pub phone_number: Option<String>,
    pub date_of_birth: NaiveDate,
    #[validate(custom(function = "validate_status"))]
    pub status: String,
}

/// Partial update payload (PATCH)
///
/// Outer `None`: key absent, field untouched. `Some(None)`: explicit null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPatch {
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub full_name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_number: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_of_birth: Option<Option<NaiveDate>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<Option<String>>,
}
