//! Carregamento: internal tracking of vehicle loading and pickup status.

pub mod server;
