//! Deep structural merge of two mapping documents.
//!
//! [`deep_merge`] combines two JSON trees; colliding arrays go through
//! [`merge_item_arrays`], which drops incoming entries whose
//! `custom_model_data` identity is already present.

mod dedup;
mod deep;

pub use dedup::merge_item_arrays;
pub use deep::deep_merge;
