//! Altana configurator domain logic.
//!
//! Pure, storage-agnostic building blocks of the configuration-assembly
//! pipeline:
//!
//! - [`product_line`] — the two independent configurator variants.
//! - [`draft`] — the in-progress [`draft::ConfigurationDraft`] and the
//!   merge-patch accumulator.
//! - [`wizard`] — per-line step tables, step validation, and the
//!   [`wizard::Wizard`] sequencer.
//! - [`availability`] — candidate narrowing by upstream compatibility.
//! - [`submission`] — final preconditions, color resolution, and the two
//!   persisted record shapes.
//!
//! Nothing in this crate performs I/O; the `altana-db` and `altana-api`
//! crates wire these functions to PostgreSQL and HTTP.

pub mod availability;
pub mod draft;
pub mod error;
pub mod product_line;
pub mod submission;
pub mod types;
pub mod wizard;
