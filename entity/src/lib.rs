//! SeaORM entity definitions for the carregamento database.

pub mod prelude;

pub mod employee;
pub mod loading_record;
