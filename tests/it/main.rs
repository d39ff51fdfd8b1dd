//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's
//! best practices, reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - helpers: the FakeMap host double, drivers, and assertion helpers
//! - integration: full session walkthroughs and teardown properties
//! - unit: formatting and configuration tests against the public API

mod integration;
mod unit;
