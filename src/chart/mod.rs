//! Chart rendering with plotters.

mod palette;

pub mod bar;
pub mod rose;

pub use bar::render_bar_chart;
pub use palette::species_color;
pub use rose::render_rose_chart;

use crate::error::Error;
use std::path::Path;

/// Map a plotters backend error into a chart rendering error.
pub(crate) fn render_error(path: &Path, e: &impl std::fmt::Display) -> Error {
    Error::ChartRender {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}
