//! geyser-merge combines two Geyser item-mapping JSON documents into one.
//!
//! The whole crate is a small pure-data pipeline over [`serde_json::Value`]
//! trees. serde_json is built with the `preserve_order` feature, so object
//! keys keep insertion order; both the merge key-order contract and the
//! alphabetic key sort depend on that.
//!
//! 1. [`merge::deep_merge`] recursively merges an incoming document into a
//!    copy of a base document, deduplicating colliding item arrays by
//!    `custom_model_data`.
//! 2. [`sort::sort_by_model_data`] stable-sorts every array under `items`
//!    ascending by the same field.
//! 3. [`sort::sort_keys_alphabetically`] reorders the `items` map by
//!    normalized key.
//! 4. [`stats::compute_stats`] derives summary figures from the result.
//!
//! [`document::merge_documents`] runs passes 1 through 3 and returns a
//! [`document::MergeResult`]. The [`cli`] module and the `geyser-merge`
//! binary wrap the pipeline for files on disk.

pub mod cli;
pub mod document;
pub mod error;
pub mod merge;
pub mod output;
pub mod sort;
pub mod stats;

// Re-exports for convenience
pub use document::{merge_documents, MergeResult};
pub use error::InputError;
pub use merge::{deep_merge, merge_item_arrays};
pub use output::{output_file_name, to_pretty_json};
pub use sort::{sort_by_model_data, sort_keys_alphabetically};
pub use stats::{compute_stats, Stats};
