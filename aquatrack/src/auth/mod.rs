//! Credential handling.
//!
//! Aquatrack authenticates by username and password only. Login confirms the credentials and
//! returns the user's id; no session or token is issued, so later requests identify the user by
//! that id alone.
//!
//! # Modules
//!
//! - [`password`]: Password hashing and verification using Argon2

pub mod password;
