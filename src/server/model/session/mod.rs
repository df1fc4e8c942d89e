//! Session data models and utilities.
//!
//! This module provides type-safe wrappers for session data storage and retrieval using
//! tower-sessions. Each submodule defines a specific piece of session state (logged-in
//! employee, pending notices) with methods for inserting, retrieving, and removing data from
//! the session store, plus the store backend itself (in-memory or Valkey/Redis).

pub mod employee;
pub mod notice;
pub mod store;
