//! Test utilities for integration testing.
//!
//! This module provides:
//! - Test data factories for creating valid test fixtures
//! - In-memory repository and port implementations for mocking persistence and
//!   third-party APIs
//! - A builder for constructing `AppState` with test dependencies

mod factories;
mod mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use mocks::*;
