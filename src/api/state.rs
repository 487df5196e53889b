//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::auth::TokenSigner;
use crate::config::AdminConfig;
use crate::forest::FamilyService;
use crate::traits::PhotoStore;

/// Application state shared across handlers
pub struct AppState {
    /// Query façade and mutation entry point over the record store
    pub service: FamilyService,

    /// Opaque photo blob store
    pub photos: Arc<dyn PhotoStore>,

    /// Verifies admin bearer tokens presented on mutating calls
    pub tokens: TokenSigner,

    /// Admin principal checked by the login endpoint
    pub admin: AdminConfig,
}
