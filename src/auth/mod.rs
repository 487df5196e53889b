//! Admin credential: issuing and verifying bearer tokens

pub mod token;

pub use token::{AdminClaims, TokenSigner};
