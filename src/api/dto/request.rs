//! Request DTOs

use serde::{Deserialize, Deserializer};

use crate::traits::{Gender, MemberPatch, NewMember};

/// Request body for POST /login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for POST /members
#[derive(Debug, Deserialize)]
pub struct CreateMemberRequest {
    pub full_name: String,

    #[serde(default)]
    pub branch_name: Option<String>,

    #[serde(default)]
    pub parent_id: Option<i64>,

    #[serde(default)]
    pub gender: Option<Gender>,

    #[serde(default)]
    pub birth_year: Option<i32>,

    #[serde(default)]
    pub death_year: Option<i32>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    /// Defaults to alive when unspecified
    #[serde(default = "default_true")]
    pub is_alive: bool,
}

impl From<CreateMemberRequest> for NewMember {
    fn from(req: CreateMemberRequest) -> Self {
        NewMember {
            full_name: req.full_name,
            branch_name: req.branch_name,
            parent_id: req.parent_id,
            gender: req.gender,
            birth_year: req.birth_year,
            death_year: req.death_year,
            email: req.email,
            phone: req.phone,
            is_alive: req.is_alive,
        }
    }
}

/// Request body for PUT /members/{id}
///
/// Only provided fields get updated. For nullable fields an explicit JSON
/// `null` clears the value, while omitting the field leaves it alone; the
/// double-Option deserializer keeps the two apart.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMemberRequest {
    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub branch_name: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub parent_id: Option<Option<i64>>,

    #[serde(default, deserialize_with = "double_option")]
    pub gender: Option<Option<Gender>>,

    #[serde(default, deserialize_with = "double_option")]
    pub birth_year: Option<Option<i32>>,

    #[serde(default, deserialize_with = "double_option")]
    pub death_year: Option<Option<i32>>,

    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,

    #[serde(default)]
    pub is_alive: Option<bool>,
}

impl From<UpdateMemberRequest> for MemberPatch {
    fn from(req: UpdateMemberRequest) -> Self {
        MemberPatch {
            full_name: req.full_name,
            branch_name: req.branch_name,
            parent_id: req.parent_id,
            gender: req.gender,
            birth_year: req.birth_year,
            death_year: req.death_year,
            email: req.email,
            phone: req.phone,
            is_alive: req.is_alive,
        }
    }
}

/// Query parameters for GET /search
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,

    #[serde(default)]
    pub limit: Option<usize>,
}

/// Query parameters for listing endpoints
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    #[serde(default)]
    pub limit: Option<usize>,
}

fn default_true() -> bool {
    true
}

/// A present-but-null field deserializes to `Some(None)`; an absent field
/// stays `None` via `#[serde(default)]`
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
