//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! database model type aliases, loading record form input, and session data structures. These
//! models bridge the gap between database entities, HTTP handlers and views.

pub mod app;
pub mod db;
pub mod loading;
pub mod session;
