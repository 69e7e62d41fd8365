use super::types::{CurvePath, Point, ThrowStyle};

/// Chart is CHART_SIZE x CHART_SIZE, y grows downward.
pub const CHART_SIZE: f64 = 500.0;
/// Where every throw leaves the hand.
pub const RELEASE_POINT: Point = Point::new(200.0, 500.0);

const TURN_SCALE: f64 = 70.0;
const FADE_SCALE: f64 = 50.0;
const MID_RISE: f64 = 200.0;
const END_RISE: f64 = 400.0;

/// Stylised flight curve for one power level.
///
/// Turn pushes the whole flight sideways, fade pulls the last point back.
/// A forehand throw mirrors both lateral offsets. This is a drawing aid,
/// not a physics model.
pub fn flight_path(turn: f64, fade: f64, style: ThrowStyle, power_factor: f64) -> CurvePath {
    let sign = style.lateral_sign();
    let turn_amount = -turn * TURN_SCALE * power_factor * sign;
    let fade_amount = fade * FADE_SCALE * power_factor * sign;

    let start = RELEASE_POINT;
    let mid_y = start.y - MID_RISE * power_factor;
    let end_y = start.y - END_RISE * power_factor;
    let turned_x = start.x + turn_amount;

    CurvePath {
        start,
        c1: Point::new(turned_x, mid_y),
        c2: Point::new(turned_x, end_y),
        end: Point::new(turned_x - fade_amount, end_y),
    }
}
