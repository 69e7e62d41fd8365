use super::surface::{RenderSurface, StrokeStyle};
use crate::model::{FlightResult, Point, PowerLevel, CHART_SIZE, RELEASE_POINT};
use strum::IntoEnumIterator;

const GRID_STROKE: StrokeStyle = StrokeStyle::solid("#e5e7eb", 1);
const GRID_XS: [f64; 3] = [200.0, 100.0, 300.0];
const GRID_TOP: f64 = 20.0;
const LEGEND_ORIGIN: Point = Point::new(10.0, 10.0);
const LEGEND_ROW: f64 = 20.0;
const LEGEND_SWATCH: f64 = 20.0;

/// Distance labels pinned to the chart (independent of the disc).
const DISTANCE_LABELS: [(f64, &str); 2] = [(250.0, "250 ft"), (100.0, "400 ft")];

/// Draws the flight chart onto `surface`.
///
/// The grid, distance labels and release marker are always drawn; curves and
/// legend only when there is a result to show.
pub fn draw_flight_chart<S: RenderSurface + ?Sized>(surface: &mut S, result: Option<&FlightResult>) {
    for x in GRID_XS {
        surface.line(
            Point::new(x, CHART_SIZE),
            Point::new(x, GRID_TOP),
            GRID_STROKE,
        );
    }
    for (y, label) in DISTANCE_LABELS {
        surface.text(
            Point::new(RELEASE_POINT.x + 5.0, y),
            label,
            "text-sm fill-gray-400",
        );
    }

    if let Some(result) = result {
        for level in PowerLevel::iter() {
            surface.path(&result.paths.get(level).to_svg_path(), level.stroke());
        }
        draw_legend(surface);
    }

    surface.circle(RELEASE_POINT, 4.0, "#000");
}

fn draw_legend<S: RenderSurface + ?Sized>(surface: &mut S) {
    surface.begin_group(LEGEND_ORIGIN);
    for (row, level) in PowerLevel::iter().enumerate() {
        let y = row as f64 * LEGEND_ROW;
        surface.line(Point::new(0.0, y), Point::new(LEGEND_SWATCH, y), level.stroke());
        surface.text(
            Point::new(LEGEND_SWATCH + 5.0, y + 5.0),
            level.label(),
            "text-sm fill-gray-600",
        );
    }
    surface.end_group();
}
