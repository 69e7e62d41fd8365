use crate::model::{Point, PowerLevel};

/// Stroke for lines and curves. `dash` is an SVG dash array such as `"5,5"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeStyle {
    pub color: &'static str,
    pub width: u32,
    pub dash: Option<&'static str>,
}

impl StrokeStyle {
    pub const fn solid(color: &'static str, width: u32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub const fn dashed(color: &'static str, width: u32, dash: &'static str) -> Self {
        Self {
            color,
            width,
            dash: Some(dash),
        }
    }
}

impl PowerLevel {
    pub fn stroke(&self) -> StrokeStyle {
        match self {
            Self::Under => StrokeStyle::dashed("#f97316", 3, "5,5"),
            Self::Normal => StrokeStyle::solid("#22c55e", 4),
            Self::Over => StrokeStyle::dashed("#ef4444", 3, "5,5"),
        }
    }
}

/// Drawing target for the flight chart.
///
/// Coordinates are in the 500x500 chart space. Groups may be nested; every
/// `begin_group` is matched by an `end_group`.
pub trait RenderSurface {
    fn line(&mut self, from: Point, to: Point, stroke: StrokeStyle);
    fn path(&mut self, data: &str, stroke: StrokeStyle);
    fn circle(&mut self, center: Point, radius: f64, fill: &str);
    fn text(&mut self, at: Point, content: &str, class: &str);
    fn begin_group(&mut self, translate: Point);
    fn end_group(&mut self);
}
