//! Tests for the session authentication endpoints.

mod login;

use super::*;
