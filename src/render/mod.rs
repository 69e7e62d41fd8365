pub mod chart;
pub mod surface;
pub mod svg;

pub use self::chart::draw_flight_chart;
pub use self::surface::{RenderSurface, StrokeStyle};
pub use self::svg::SvgSurface;

use crate::model::{FlightResult, CHART_SIZE};

/// Renders the complete chart as an SVG document.
pub fn render_svg(result: Option<&FlightResult>) -> String {
    let mut svg = SvgSurface::new(CHART_SIZE, CHART_SIZE);
    draw_flight_chart(&mut svg, result);
    svg.finish()
}
