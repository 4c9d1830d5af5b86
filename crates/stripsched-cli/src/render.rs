//! SVG rendering of a solved layout: a solved result goes in, a
//! hand-written SVG document comes out. No charting crate.

use anyhow::{anyhow, Result};
use std::fmt::Write as _;
use stripsched_core::SolveOutcome;

const MARGIN: f64 = 20.0;
const SCALE: f64 = 20.0;

/// Draws `outcome.best_layout` to an SVG document. Errors if the solve had
/// no feasible layout to draw.
pub fn render_svg(outcome: &SolveOutcome, strip_width: u32) -> Result<String> {
    let height = outcome
        .best_height
        .ok_or_else(|| anyhow!("no feasible layout to render: the solve was infeasible"))?;

    let mut svg = String::new();
    let svg_width = strip_width as f64 * SCALE + 2.0 * MARGIN;
    let svg_height = height as f64 * SCALE + 2.0 * MARGIN;

    writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        &mut svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{svg_width}" height="{svg_height}" viewBox="0 0 {svg_width} {svg_height}">"#
    )?;
    writeln!(&mut svg, r##"  <rect width="100%" height="100%" fill="#f5f5f5"/>"##)?;

    for (idx, item) in outcome.best_layout.iter().enumerate() {
        let x = MARGIN + item.x as f64 * SCALE;
        let y = MARGIN + (height as f64 - item.y as f64 - item.height as f64) * SCALE;
        let w = item.width as f64 * SCALE;
        let h = item.height as f64 * SCALE;

        writeln!(
            &mut svg,
            r##"  <rect x="{x}" y="{y}" width="{w}" height="{h}" fill="#4CAF50" stroke="#2E7D32" stroke-width="1" opacity="0.7"/>"##
        )?;
        writeln!(
            &mut svg,
            r##"  <text x="{}" y="{}" font-family="Arial" font-size="10" fill="#fff" text-anchor="middle">{idx}</text>"##,
            x + w / 2.0,
            y + h / 2.0 + 3.0,
        )?;
    }

    writeln!(&mut svg, "</svg>")?;
    Ok(svg)
}
