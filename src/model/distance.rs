const FEET_PER_SPEED: f64 = 30.0;
const FEET_PER_GLIDE: f64 = 15.0;

/// Estimated carry in feet for a throw at `power_factor`.
///
/// Linear in speed and glide; no clamping, so negative ratings give
/// negative distances and huge or infinite ratings carry straight through.
pub fn estimate_distance(speed: f64, glide: f64, power_factor: f64) -> f64 {
    let base = speed * FEET_PER_SPEED + glide * FEET_PER_GLIDE;
    round_half_up(base * power_factor)
}

// Halves round toward +inf (-7.5 -> -7), unlike f64::round.
// Non-finite values pass through.
fn round_half_up(v: f64) -> f64 {
    let r = v.floor();
    if v - r >= 0.5 {
        r + 1.0
    } else {
        r
    }
}
