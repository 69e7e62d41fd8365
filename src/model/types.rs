use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The four flight numbers printed on a disc.
///
/// Values are taken as-is. The declared ranges on [`DiscField::soft_range`]
/// are input hints only and are never enforced by the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscRatings {
    pub speed: f64,
    pub glide: f64,
    pub turn: f64, // negative = turns right on RHBH
    pub fade: f64, // positive = fades left on RHBH
}

impl Default for DiscRatings {
    fn default() -> Self {
        Self {
            speed: 7.0,
            glide: 5.0,
            turn: -2.0,
            fade: 2.0,
        }
    }
}

impl DiscRatings {
    pub fn new(speed: f64, glide: f64, turn: f64, fade: f64) -> Self {
        Self {
            speed,
            glide,
            turn,
            fade,
        }
    }

    pub fn get(&self, field: DiscField) -> f64 {
        match field {
            DiscField::Speed => self.speed,
            DiscField::Glide => self.glide,
            DiscField::Turn => self.turn,
            DiscField::Fade => self.fade,
        }
    }

    pub fn set(&mut self, field: DiscField, value: f64) {
        match field {
            DiscField::Speed => self.speed = value,
            DiscField::Glide => self.glide = value,
            DiscField::Turn => self.turn = value,
            DiscField::Fade => self.fade = value,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum DiscField {
    Speed,
    Glide,
    Turn,
    Fade,
}

impl DiscField {
    /// Input-widget hint (min, max). Not a validation rule.
    pub fn soft_range(&self) -> (f64, f64) {
        match self {
            Self::Speed => (1.0, 14.0),
            Self::Glide => (1.0, 7.0),
            Self::Turn => (-5.0, 1.0),
            Self::Fade => (0.0, 5.0),
        }
    }

    pub fn in_soft_range(&self, value: f64) -> bool {
        let (min, max) = self.soft_range();
        value >= min && value <= max
    }
}

/// Throwing technique for a right-handed thrower.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(ascii_case_insensitive)]
pub enum ThrowStyle {
    #[default]
    #[strum(serialize = "RHBH")]
    #[serde(rename = "RHBH")]
    #[value(name = "rhbh")]
    RightHandBackhand,

    #[strum(serialize = "RHFH")]
    #[serde(rename = "RHFH")]
    #[value(name = "rhfh")]
    RightHandForehand,
}

impl ThrowStyle {
    /// Sign applied to every lateral offset. Forehand mirrors backhand.
    pub fn lateral_sign(&self) -> f64 {
        match self {
            Self::RightHandBackhand => 1.0,
            Self::RightHandForehand => -1.0,
        }
    }
}

/// Throwing effort relative to the disc's rated speed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum PowerLevel {
    Under,
    Normal,
    Over,
}

impl PowerLevel {
    pub fn factor(&self) -> f64 {
        match self {
            Self::Under => 0.7,
            Self::Normal => 1.0,
            Self::Over => 1.3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Under => "Under Power",
            Self::Normal => "Normal Power",
            Self::Over => "Over Power",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Stability {
    Understable,
    Stable,
    Overstable,
}

/// One value per power level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerTriple<T> {
    pub under: T,
    pub normal: T,
    pub over: T,
}

impl<T> PowerTriple<T> {
    /// Builds a triple by evaluating `f` for Under, Normal and Over (in that order).
    pub fn from_fn(mut f: impl FnMut(PowerLevel) -> T) -> Self {
        Self {
            under: f(PowerLevel::Under),
            normal: f(PowerLevel::Normal),
            over: f(PowerLevel::Over),
        }
    }

    pub fn get(&self, level: PowerLevel) -> &T {
        match level {
            PowerLevel::Under => &self.under,
            PowerLevel::Normal => &self.normal,
            PowerLevel::Over => &self.over,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PowerTriple<U> {
        PowerTriple {
            under: f(&self.under),
            normal: f(&self.normal),
            over: f(&self.over),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Single cubic Bezier segment in the 500x500 chart space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePath {
    pub start: Point,
    pub c1: Point,
    pub c2: Point,
    pub end: Point,
}

impl CurvePath {
    /// SVG path data, e.g. `M 200 500 C 340 300, 340 100, 240 100`.
    pub fn to_svg_path(&self) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            fmt_num(self.start.x),
            fmt_num(self.start.y),
            fmt_num(self.c1.x),
            fmt_num(self.c1.y),
            fmt_num(self.c2.x),
            fmt_num(self.c2.y),
            fmt_num(self.end.x),
            fmt_num(self.end.y),
        )
    }
}

/// Shortest decimal form; `-0` prints as `0`, infinities as `Infinity`.
pub fn fmt_num(v: f64) -> String {
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v.is_nan() {
        return "NaN".to_string();
    }
    format!("{}", v + 0.0)
}

/// Everything derived from one committed disc and throw style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightResult {
    pub stability: Stability,
    pub distances: PowerTriple<f64>, // feet
    pub paths: PowerTriple<CurvePath>,
}
