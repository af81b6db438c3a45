//! Shared test utilities for rts integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod fake_user_api;
pub mod fixtures;

pub use fake_user_api::FakeUserApi;
pub use fixtures::*;
