//! Utility functions for controller request handling.
//!
//! This module provides the session gate shared by every protected page and the record ID
//! extraction of the `/edit` and `/delete` paths.

pub mod path;
pub mod session;
