//! Server application core modules.
//!
//! This module contains all server-side functionality for Carregamento, including HTTP
//! routing, session-based employee authentication, database access, server-rendered views
//! and the startup routine that migrates and seeds the database.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
pub mod view;
