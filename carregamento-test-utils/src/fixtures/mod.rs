//! Test fixture modules for database records.
//!
//! - `employee` - Employees with Argon2-hashed passwords
//! - `loading` - Loading records with controllable timestamps

pub mod employee;
pub mod loading;
