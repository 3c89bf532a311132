//! SVG export
//!
//! Writes one element per top-level figure onto a fixed-size canvas. The
//! canvas size comes from configuration (1000x1000 by default) and is not
//! derived from the content.
//!
//! Element rules by geometry kind:
//! - rectangle/square: `rect` from the untransformed bounds plus a
//!   `transform="matrix(...)"` attribute
//! - ellipse/circle: `ellipse`/`circle` from the untransformed bounds and no
//!   transform attribute, so transformed ellipses export at their local
//!   position
//! - polygon/polyline: `points` with the transform applied to each point
//! - anything else, nested groups included: no element

use std::path::Path;

use anyhow::{Context, Result};

use super::named_color::named_color;
use crate::config::ExportConfig;
use crate::domain::{Drawable, Figure, Geometry, Layer, Style};

const PROLOG: [&str; 3] = [
    r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#,
    r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN""#,
    r#" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#,
];

/// Export `layer` as SVG with default settings
pub fn export_vector(path: impl AsRef<Path>, layer: &Layer) -> Result<()> {
    export_vector_with(path, layer, &ExportConfig::default())
}

/// Export `layer` as SVG text (UTF-8)
pub fn export_vector_with(
    path: impl AsRef<Path>,
    layer: &Layer,
    config: &ExportConfig,
) -> Result<()> {
    let path = path.as_ref();
    let markup = to_markup(layer, config);
    std::fs::write(path, markup)
        .with_context(|| format!("Failed to write SVG file: {}", path.display()))?;
    Ok(())
}

/// Build the whole document, one line per element
pub fn to_markup(layer: &Layer, config: &ExportConfig) -> String {
    let (width, height) = config.markup_canvas;
    let mut lines: Vec<String> = PROLOG.iter().map(|l| l.to_string()).collect();
    lines.push(format!(
        r#"<svg width="{}" height="{}"  xmlns="http://www.w3.org/2000/svg" version="1.1">"#,
        width, height
    ));

    let mut skipped = 0;
    for drawable in &layer.figures {
        match element(drawable) {
            Some(line) => lines.push(line),
            None => skipped += 1,
        }
    }
    lines.push("</svg>".to_string());

    log::debug!(
        "Built SVG with {} elements ({} figures without markup)",
        layer.figures.len() - skipped,
        skipped
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Markup for one top-level item, `None` for kinds that have none
pub fn element(drawable: &Drawable) -> Option<String> {
    match drawable {
        Drawable::Figure(figure) => figure_element(figure),
        Drawable::Group(_) => None,
    }
}

fn figure_element(figure: &Figure) -> Option<String> {
    let style = style_attr(&figure.style);
    let rect = figure.local_path().bounds();
    let rx = rect.width() / 2.0;
    let ry = rect.height() / 2.0;

    let line = match &figure.geometry {
        Geometry::Rectangle(_) | Geometry::Square { .. } => {
            let [a, b, c, d, e, f] = figure.transform.elements().map(num);
            format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" {} transform="matrix({}, {}, {}, {}, {}, {})"/>"#,
                num(rect.left),
                num(rect.top),
                num(rect.width()),
                num(rect.height()),
                style,
                a,
                b,
                c,
                d,
                e,
                f
            )
        }
        Geometry::Ellipse(_) => format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" {}/>"#,
            num(rect.left + rx),
            num(rect.top + ry),
            num(rx),
            num(ry),
            style
        ),
        // Center y is offset by the x radius
        Geometry::Circle { .. } => format!(
            r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
            num(rect.left + rx),
            num(rect.top + rx),
            num(rx),
            style
        ),
        Geometry::Polygon(points) | Geometry::Polyline(points) => {
            let mut coords = String::new();
            for p in figure.transform.apply_points(points) {
                coords.push_str(&format!("{},{} ", num(p.x), num(p.y)));
            }
            format!(
                r#"<{} points="{}" {}/>"#,
                figure.geometry.name().to_lowercase(),
                coords,
                style
            )
        }
        _ => {
            log::trace!("No markup for {} figure", figure.geometry.name());
            return None;
        }
    };
    Some(line)
}

/// `style="..."` attribute: fill name or `none`, then the stroke if visible
pub fn style_attr(style: &Style) -> String {
    let fill = match style.visible_fill() {
        Some(fill) => format!("fill:{};", named_color(fill.color)),
        None => "fill:none;".to_string(),
    };
    let stroke = match style.visible_border() {
        Some(border) => format!(
            "stroke:{};stroke-width:{};",
            named_color(border.color),
            num(border.width)
        ),
        None => String::new(),
    };
    format!(r#"style="{}{}""#, fill, stroke.trim_end_matches(';'))
}

/// Shortest decimal form, with negative zero written as `0`
fn num(v: f32) -> String {
    format!("{}", v + 0.0)
}
