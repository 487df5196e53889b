//! Record store trait definition and the member record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ServerResult;

/// Member gender
///
/// Absent means unspecified; the store never guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Parse the stored text form; anything unrecognized reads as unspecified
    pub fn parse(s: &str) -> Option<Gender> {
        match s {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// A member record (stored in the database)
///
/// `parent_id` is the only structural edge; the full set of members forms a
/// forest of rooted trees. A member with no parent is a root.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// Unique identifier, immutable once assigned (AUTOINCREMENT, so id
    /// order is creation order)
    pub id: i64,

    pub full_name: String,

    /// Optional label, not structural
    pub branch_name: Option<String>,

    /// Reference to another member, or none for a root
    pub parent_id: Option<i64>,

    /// Opaque reference into the photo blob store
    pub image_url: Option<String>,

    pub gender: Option<Gender>,

    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,

    pub email: Option<String>,
    pub phone: Option<String>,

    /// Independent of `death_year`; the two are never derived from one
    /// another
    pub is_alive: bool,

    pub created_at: DateTime<Utc>,
}

/// Validated parameters for inserting a new member
///
/// Field bounds are enforced by the mutation guard before this reaches the
/// store.
#[derive(Debug, Clone, Default)]
pub struct NewMember {
    pub full_name: String,
    pub branch_name: Option<String>,
    pub parent_id: Option<i64>,
    pub gender: Option<Gender>,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_alive: bool,
}

/// Partial update for an existing member
///
/// Outer `None` means "leave the field alone"; `Some(None)` clears a
/// nullable field. `full_name` and `is_alive` cannot be cleared, only
/// replaced.
#[derive(Debug, Clone, Default)]
pub struct MemberPatch {
    pub full_name: Option<String>,
    pub branch_name: Option<Option<String>>,
    pub parent_id: Option<Option<i64>>,
    pub gender: Option<Option<Gender>>,
    pub birth_year: Option<Option<i32>>,
    pub death_year: Option<Option<i32>>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub is_alive: Option<bool>,
}

impl MemberPatch {
    /// True when no field is set; an empty patch is still a valid edit
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.branch_name.is_none()
            && self.parent_id.is_none()
            && self.gender.is_none()
            && self.birth_year.is_none()
            && self.death_year.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.is_alive.is_none()
    }
}

/// Durable keyed storage of member records
///
/// The store is the sole durable owner of members; every index over them is
/// a derived, rebuildable view. Implementations must hand out members in
/// ascending id order from `list_all` so insertion order is reproducible.
pub trait MemberStore: Send + Sync {
    /// Point lookup; `NotFound` when the id does not exist
    fn get(&self, id: i64) -> ServerResult<Member>;

    /// Full scan, ascending id order
    fn list_all(&self) -> ServerResult<Vec<Member>>;

    /// Insert a new member, assigning a fresh unique id
    fn insert(&self, new: &NewMember) -> ServerResult<Member>;

    /// Overwrite every field of an existing member (id addressed);
    /// `NotFound` when the id does not exist
    fn update(&self, member: &Member) -> ServerResult<Member>;

    /// Remove a member; `NotFound` when the id does not exist
    fn delete(&self, id: i64) -> ServerResult<()>;

    /// Point update of the photo reference
    fn set_image_url(&self, id: i64, url: Option<&str>) -> ServerResult<Member>;
}
