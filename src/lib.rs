//! `reality-check` library crate.
//!
//! Pure scoring and forecast engines plus the dashboard dispatch, config
//! and output layers the `reality-check` binary is built from.

pub mod compare;
pub mod config;
pub mod dashboard;
pub mod forecast;
pub mod output;
pub mod scoring;
