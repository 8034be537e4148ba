//! Shared test harness modules for the Larder CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod helpers;
#[cfg(feature = "store-sqlite")]
mod import_steps;
mod import_unit;
