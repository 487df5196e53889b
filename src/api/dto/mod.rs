//! Request and response DTOs

pub mod request;
pub mod response;

pub use request::{
    CreateMemberRequest, LimitParams, LoginRequest, SearchParams, UpdateMemberRequest,
};
pub use response::{DeleteResponse, HealthResponse, LineageResponse, MemberDto, TokenResponse};
