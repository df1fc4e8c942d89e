//! Service layer for business logic.
//!
//! Services sit between controllers and repositories: they validate input, verify
//! credentials, open transactions around read-modify-write sequences, and turn missing
//! records into domain errors.

pub mod auth;
pub mod loading;
pub mod seed;
