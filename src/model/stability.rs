use super::types::Stability;

/// Classifies a disc from its turn and fade numbers.
///
/// Any finite input is accepted, including values outside the usual
/// rating ranges.
pub fn classify_stability(turn: f64, fade: f64) -> Stability {
    if turn < -1.0 {
        if fade >= 2.0 {
            Stability::Stable
        } else {
            Stability::Understable
        }
    } else if fade >= 3.0 {
        Stability::Overstable
    } else {
        Stability::Stable
    }
}
