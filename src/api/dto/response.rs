//! Response DTOs

use serde::Serialize;

use crate::traits::{Gender, Member};

/// A member record as returned by every endpoint
#[derive(Debug, Clone, Serialize)]
pub struct MemberDto {
    pub id: i64,
    pub full_name: String,
    pub branch_name: Option<String>,
    pub parent_id: Option<i64>,
    pub image_url: Option<String>,
    pub gender: Option<Gender>,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_alive: bool,
}

impl From<Member> for MemberDto {
    fn from(m: Member) -> Self {
        MemberDto {
            id: m.id,
            full_name: m.full_name,
            branch_name: m.branch_name,
            parent_id: m.parent_id,
            image_url: m.image_url,
            gender: m.gender,
            birth_year: m.birth_year,
            death_year: m.death_year,
            email: m.email,
            phone: m.phone,
            is_alive: m.is_alive,
        }
    }
}

/// GET /person/{id} response: the member plus its root-first ancestor chain
#[derive(Debug, Serialize)]
pub struct LineageResponse {
    pub person: MemberDto,
    pub lineage: Vec<MemberDto>,
}

/// POST /login response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// DELETE /members/{id} response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub detail: String,
    pub id: i64,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "unhealthy"
    pub status: String,
}
