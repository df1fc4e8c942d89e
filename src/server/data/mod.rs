//! Data access layer repositories.
//!
//! This module contains the database repositories for employees and loading records.
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so services can run them either
//! directly on the connection or inside a transaction.

pub mod employee;
pub mod loading_record;
