//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's
//! best practices, reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - helpers: Builders for synthetic gesture scripts
//! - unit: Single-component unit tests
//! - integration: Multi-component workflow tests

mod helpers;
mod unit;
