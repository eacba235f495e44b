//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead.
//!
//! Structure:
//! - helpers: Editor builder, input simulation and assertions
//! - integration: Multi-component workflow tests driven through input events
//! - unit: Single-component unit tests

mod integration;
mod unit;
