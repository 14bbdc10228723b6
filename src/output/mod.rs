//! Rendered chart output handling.

mod publish;

pub use publish::publish_chart;
