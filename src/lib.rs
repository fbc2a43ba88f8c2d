//! Crate computing the Starknet selectors of the job and worker events.
//!
//! A selector is the `sn_keccak` hash of an event name, found as the first key of every emitted
//! event. The crate exposes the known event names, their selectors and the report printed by the
//! `event-selectors` binary.

/// Module containing the known event names and their compile-time selectors.
pub mod constants;

/// Module for the error type of the crate.
pub mod error;

/// Module for writing the selector report.
pub mod report;

/// Module for deriving selectors from event names.
pub mod selector;

pub use error::SelectorError;
pub use report::{print_report, write_report};
pub use selector::{compute_selectors, derive_selector, EventSelector};
