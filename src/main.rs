use std::path::{Path, PathBuf};
use std::process::ExitCode;

use figdraw::domain::{
    BorderStyle, Color, DashStyle, Figure, FillStyle, Geometry, Layer, LinearGradient, Point,
    Rect, Style, Transform,
};
use figdraw::{ExportConfig, export_raster_with, export_vector_with};

fn usage() {
    eprintln!("usage: figdraw [--config FILE] OUTPUT...");
    eprintln!("  .svg outputs are written as markup, anything else as an image");
}

/// A few shapes covering every geometry kind
fn sample_layer() -> Layer {
    let outline = BorderStyle::new(Color::BLACK, 2.0);
    Layer::new(Some(FillStyle::solid(Color::WHITE)))
        .with(
            Figure::new(Geometry::Rectangle(Rect::from_xywh(0.0, 0.0, 80.0, 50.0)))
                .with_transform(Transform::translation(20.0, 20.0))
                .with_style(Style::new(
                    Some(FillStyle::solid(Color::rgb(255, 165, 0))),
                    Some(outline.clone()),
                )),
        )
        .with(
            Figure::new(Geometry::Ellipse(Rect::from_xywh(120.0, 20.0, 90.0, 50.0))).with_style(
                Style::new(
                    Some(FillStyle::solid(Color::BLUE).with_gradient(LinearGradient {
                        color: Color::WHITE,
                        angle: 45.0,
                    })),
                    Some(outline.clone().with_dash(DashStyle::Dash)),
                ),
            ),
        )
        .with(
            Figure::new(Geometry::Circle {
                cx: 60.0,
                cy: 120.0,
                radius: 30.0,
            })
            .with_style(Style::new(Some(FillStyle::solid(Color::GREEN)), None)),
        )
        .with(
            Figure::new(Geometry::Polygon(vec![
                Point::new(0.0, 0.0),
                Point::new(40.0, 0.0),
                Point::new(20.0, 35.0),
            ]))
            .with_transform(Transform::translation(140.0, 100.0))
            .with_style(Style::new(
                Some(FillStyle::solid(Color::RED).with_opacity(180)),
                Some(outline.clone()),
            )),
        )
        .with(
            Figure::new(Geometry::Polyline(vec![
                Point::new(0.0, 0.0),
                Point::new(30.0, 20.0),
                Point::new(60.0, 0.0),
            ]))
            .with_transform(Transform::translation(20.0, 170.0))
            .with_style(Style::new(None, Some(outline.with_dash(DashStyle::DashDot)))),
        )
}

fn export(path: &Path, layer: &Layer, config: &ExportConfig) -> anyhow::Result<()> {
    let is_svg = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        export_vector_with(path, layer, config)
    } else {
        export_raster_with(path, layer, config)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = std::env::args().skip(1);
    let mut config = ExportConfig::default();
    let mut outputs = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let Some(file) = args.next() else {
                usage();
                return ExitCode::FAILURE;
            };
            config = ExportConfig::load(Path::new(&file));
        } else {
            outputs.push(PathBuf::from(arg));
        }
    }
    if outputs.is_empty() {
        usage();
        return ExitCode::FAILURE;
    }

    let layer = sample_layer();
    let mut status = ExitCode::SUCCESS;
    for path in &outputs {
        match export(path, &layer, &config) {
            Ok(()) => log::info!("Exported {}", path.display()),
            Err(err) => {
                log::error!("Failed to export {}: {:?}", path.display(), err);
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
