//! Horizontal bar chart of the most detected species.

use std::path::Path;

use plotters::chart::ChartBuilder;
use plotters::element::{Rectangle, Text};
use plotters::prelude::{BitMapBackend, IntoDrawingArea};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont, RGBColor, TextStyle, WHITE};
use tracing::debug;

use crate::chart::{render_error, species_color};
use crate::constants::chart::{BAR_HEIGHT, BAR_WIDTH};
use crate::error::Result;

const TEXT_COLOR: RGBColor = RGBColor(40, 40, 40);

/// Render a species frequency ranking as a horizontal bar chart PNG.
///
/// Bars are ordered most frequent at the top; each bar is labeled with the
/// common name and count. An empty ranking renders an empty chart frame.
pub fn render_bar_chart(ranking: &[(String, u64)], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (BAR_WIDTH, BAR_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(path, &e))?;

    let max_count = ranking.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let bars = ranking.len();

    #[allow(clippy::cast_precision_loss)]
    let x_max = (max_count.max(1) as f64) * 1.05;
    #[allow(clippy::cast_precision_loss)]
    let y_max = bars.max(1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Most detected species", ("sans-serif", 28))
        .x_label_area_size(40)
        .y_label_area_size(10)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(|e| render_error(path, &e))?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(0)
        .x_desc("detections")
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(|e| render_error(path, &e))?;

    chart
        .draw_series(ranking.iter().enumerate().map(|(index, (_, count))| {
            #[allow(clippy::cast_precision_loss)]
            let y = (bars - 1 - index) as f64;
            #[allow(clippy::cast_precision_loss)]
            let width = *count as f64;
            Rectangle::new(
                [(0.0, y + 0.15), (width, y + 0.85)],
                species_color(index, bars).filled(),
            )
        }))
        .map_err(|e| render_error(path, &e))?;

    // Name and count inside the plot area, at the base of each bar.
    let label_style = TextStyle::from(("sans-serif", 16).into_font())
        .color(&TEXT_COLOR)
        .pos(Pos::new(HPos::Left, VPos::Center));
    chart
        .draw_series(ranking.iter().enumerate().map(|(index, (name, count))| {
            #[allow(clippy::cast_precision_loss)]
            let y = (bars - 1 - index) as f64;
            Text::new(
                format!("{name} ({count})"),
                (x_max * 0.01, y + 0.5),
                label_style.clone(),
            )
        }))
        .map_err(|e| render_error(path, &e))?;

    root.present().map_err(|e| render_error(path, &e))?;
    debug!("Rendered bar chart: {}", path.display());
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_render_ranking() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("freq.png");
        let ranking = vec![
            ("robin".to_string(), 12),
            ("crow".to_string(), 7),
            ("wren".to_string(), 1),
        ];

        render_bar_chart(&ranking, &output).unwrap();
        assert!(output.exists());
        assert!(std::fs::metadata(&output).unwrap().len() > 0);
    }

    #[test]
    fn test_render_empty_ranking() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("freq.png");

        render_bar_chart(&[], &output).unwrap();
        assert!(output.exists());
    }
}
