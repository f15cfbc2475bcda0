//! Integration Tests Entry Point
//!
//! Each test runs the client against a local stub of the marketplace API.
//! Tests are organized by module:
//! - `api/` - page-level scenarios
//! - `common/` - the stub server and test application

mod api;
mod common;
