//! Polar stacked wedge chart of per-minute detections.
//!
//! The chart has one wedge per minute-of-hour, laid out clockwise with
//! minute 0 at the top, each wedge stacked bottom-to-top by species.
//! Wedges are drawn directly on the bitmap as filled polygons; plotters
//! has no polar coordinate system, so the geometry is computed here.

use std::f64::consts::TAU;
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use plotters::element::{Circle, Polygon, Rectangle, Text};
use plotters::prelude::{BitMapBackend, IntoDrawingArea};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont, RGBColor, TextStyle, WHITE};
use tracing::debug;

use crate::analysis::RoseData;
use crate::chart::{render_error, species_color};
use crate::constants::chart::{
    ANNOTATION_FORMAT, ARC_STEPS, LEGEND_COLUMNS, MINUTE_LABEL_STEP, ROSE_RADIUS_FRACTION,
    ROSE_SIZE,
};
use crate::constants::window::MINUTES_PER_HOUR;
use crate::error::Result;

const GRID_COLOR: RGBColor = RGBColor(208, 208, 208);
const TEXT_COLOR: RGBColor = RGBColor(60, 60, 60);
const GRID_RINGS: usize = 4;

/// Render the trailing-hour rose chart to a PNG file.
///
/// A window with zero or one species renders normally; an empty window
/// produces the grid, labels, and annotation with no wedges.
pub fn render_rose_chart(
    data: &RoseData,
    reference: DateTime<FixedOffset>,
    path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(path, (ROSE_SIZE, ROSE_SIZE)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(path, &e))?;

    #[allow(clippy::cast_possible_wrap)]
    let center = (ROSE_SIZE as i32 / 2, ROSE_SIZE as i32 / 2);
    let radius = f64::from(ROSE_SIZE) * ROSE_RADIUS_FRACTION;
    #[allow(clippy::cast_precision_loss)]
    let scale = radius / data.max_wedge_total().max(1) as f64;
    #[allow(clippy::cast_precision_loss)]
    let wedge_width = TAU / MINUTES_PER_HOUR as f64;
    let species_count = data.species().len();

    // Radial grid rings under the wedges.
    for ring in 1..=GRID_RINGS {
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        let ring_radius = (radius * ring as f64 / GRID_RINGS as f64) as i32;
        root.draw(&Circle::new(center, ring_radius, GRID_COLOR.stroke_width(1)))
            .map_err(|e| render_error(path, &e))?;
    }

    // Stacked wedges, minute 0 at north, clockwise.
    for minute in 0..MINUTES_PER_HOUR {
        #[allow(clippy::cast_precision_loss)]
        let angle = wedge_width * minute as f64;
        let start = angle - wedge_width / 2.0;
        let end = angle + wedge_width / 2.0;

        for species in 0..species_count {
            let count = data.count(species, minute);
            if count == 0 {
                continue;
            }
            #[allow(clippy::cast_precision_loss)]
            let inner = data.stack_base(species, minute) as f64 * scale;
            #[allow(clippy::cast_precision_loss)]
            let outer = inner + count as f64 * scale;

            let color = species_color(species, species_count);
            root.draw(&Polygon::new(
                wedge_polygon(center, start, end, inner, outer),
                color.filled(),
            ))
            .map_err(|e| render_error(path, &e))?;
        }
    }

    // Minute labels every 5th wedge, just outside the grid.
    let label_style = TextStyle::from(("sans-serif", 20).into_font())
        .color(&TEXT_COLOR)
        .pos(Pos::new(HPos::Center, VPos::Center));
    for minute in (0..MINUTES_PER_HOUR).step_by(MINUTE_LABEL_STEP) {
        #[allow(clippy::cast_precision_loss)]
        let angle = wedge_width * minute as f64;
        let position = polar_point(center, angle, radius * 1.07);
        root.draw(&Text::new(format!("{minute:02}"), position, label_style.clone()))
            .map_err(|e| render_error(path, &e))?;
    }

    // Reference timestamp annotation near the center.
    let annotation_style = TextStyle::from(("sans-serif", 20).into_font())
        .color(&TEXT_COLOR)
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw(&Text::new(
        reference.format(ANNOTATION_FORMAT).to_string(),
        center,
        annotation_style,
    ))
    .map_err(|e| render_error(path, &e))?;

    draw_legend(&root, data, path)?;

    root.present().map_err(|e| render_error(path, &e))?;
    debug!("Rendered rose chart: {}", path.display());
    Ok(())
}

/// Two-column species legend in the upper-right corner.
fn draw_legend(
    root: &plotters::drawing::DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    data: &RoseData,
    path: &Path,
) -> Result<()> {
    let species_count = data.species().len();
    let size = f64::from(ROSE_SIZE);
    #[allow(clippy::cast_possible_truncation)]
    let origin_x = (size * 0.70) as i32;
    #[allow(clippy::cast_possible_truncation)]
    let origin_y = (size * 0.04) as i32;
    #[allow(clippy::cast_possible_truncation)]
    let column_width = (size * 0.15) as i32;
    let row_height = 24;
    let swatch = 14;

    let text_style = TextStyle::from(("sans-serif", 16).into_font())
        .color(&TEXT_COLOR)
        .pos(Pos::new(HPos::Left, VPos::Center));

    for (index, name) in data.species().iter().enumerate() {
        #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
        let column = (index % LEGEND_COLUMNS) as i32;
        #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
        let row = (index / LEGEND_COLUMNS) as i32;
        let x = origin_x + column * column_width;
        let y = origin_y + row * row_height;

        root.draw(&Rectangle::new(
            [(x, y), (x + swatch, y + swatch)],
            species_color(index, species_count).filled(),
        ))
        .map_err(|e| render_error(path, &e))?;
        root.draw(&Text::new(
            name.clone(),
            (x + swatch + 6, y + swatch / 2),
            text_style.clone(),
        ))
        .map_err(|e| render_error(path, &e))?;
    }

    Ok(())
}

/// Pixel position at `angle` (clockwise from north) and `radius` from center.
#[allow(clippy::cast_possible_truncation)]
fn polar_point(center: (i32, i32), angle: f64, radius: f64) -> (i32, i32) {
    (
        center.0 + (radius * angle.sin()).round() as i32,
        center.1 - (radius * angle.cos()).round() as i32,
    )
}

/// Filled annular-sector polygon between two angles and two radii.
fn wedge_polygon(
    center: (i32, i32),
    start: f64,
    end: f64,
    inner: f64,
    outer: f64,
) -> Vec<(i32, i32)> {
    let mut points = Vec::with_capacity(2 * (ARC_STEPS + 1));
    for step in 0..=ARC_STEPS {
        #[allow(clippy::cast_precision_loss)]
        let angle = start + (end - start) * step as f64 / ARC_STEPS as f64;
        points.push(polar_point(center, angle, outer));
    }
    for step in (0..=ARC_STEPS).rev() {
        #[allow(clippy::cast_precision_loss)]
        let angle = start + (end - start) * step as f64 / ARC_STEPS as f64;
        points.push(polar_point(center, angle, inner));
    }
    points
}
