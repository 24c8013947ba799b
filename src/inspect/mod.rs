//! Presence predicates and the data-series matcher.
//!
//! Every function in this layer is a side-effect-free boolean over a
//! borrowed figure or axes; the layer holds no state across calls.

pub mod data_match;
pub mod presence;

pub use data_match::{ABSOLUTE_TOLERANCE, RELATIVE_TOLERANCE, has_data};
pub use presence::{has_legend, has_text, has_title, has_xlabel, has_ylabel};
