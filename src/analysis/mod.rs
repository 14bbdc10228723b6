//! Data shaping for the chart renderers.

pub mod frequency;
pub mod rose;

pub use frequency::top_species;
pub use rose::{RoseData, minute_counts};
