//! The two in-place sort passes over a merged document.
//!
//! Both passes take exclusive `&mut` access to the document; callers must
//! not assume the input is unchanged afterwards.

mod keys;
mod model_data;

pub use keys::sort_keys_alphabetically;
pub use model_data::sort_by_model_data;
