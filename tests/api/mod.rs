//! API integration tests
//!
//! Tests for HTTP endpoints:
//! - POST /login and the admin middleware
//! - GET /person/{id}, /children/{id}, /roots
//! - GET /search, /stats, /members
//! - POST/PUT/DELETE /members and photo upload

pub mod auth_test;
pub mod lineage_test;
pub mod search_test;
pub mod stats_test;
