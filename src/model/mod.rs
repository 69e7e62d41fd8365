//! Flight model: pure functions from disc ratings to stability, distance
//! and a drawable flight curve.

pub mod distance;
pub mod path;
pub mod stability;
pub mod types;

pub use self::distance::estimate_distance;
pub use self::path::{flight_path, CHART_SIZE, RELEASE_POINT};
pub use self::stability::classify_stability;
pub use self::types::{
    CurvePath, DiscField, DiscRatings, FlightResult, Point, PowerLevel, PowerTriple, Stability,
    ThrowStyle,
};

/// Runs the whole model once: one stability label, three distances and
/// three paths (Under, Normal, Over).
pub fn compute_flight(disc: &DiscRatings, style: ThrowStyle) -> FlightResult {
    FlightResult {
        stability: classify_stability(disc.turn, disc.fade),
        distances: PowerTriple::from_fn(|level| {
            estimate_distance(disc.speed, disc.glide, level.factor())
        }),
        paths: PowerTriple::from_fn(|level| {
            flight_path(disc.turn, disc.fade, style, level.factor())
        }),
    }
}
