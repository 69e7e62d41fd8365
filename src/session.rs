use crate::error::{DfResult, DiscForgeError};
use crate::model::{compute_flight, DiscField, DiscRatings, FlightResult, ThrowStyle};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// What changed in a [`FlightSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChange {
    PendingEdited(DiscField),
    PendingReplaced,
    Committed,
    ThrowStyleChanged,
}

/// A trait for hosts that re-render whenever the session changes.
///
/// Called after the mutation has been applied. Implementations read the
/// session (usually via [`FlightSession::derive_outputs`]) but never mutate it.
pub trait SessionObserver: Send {
    fn on_change(&self, session: &FlightSession, change: SessionChange);
}

/// State behind one calculator screen.
///
/// `pending` tracks the form as it is typed, `committed` is the disc last
/// submitted, and the throw style is toggled independently of both.
pub struct FlightSession {
    pending: DiscRatings,
    committed: Option<DiscRatings>,
    throw_style: ThrowStyle,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl Default for FlightSession {
    fn default() -> Self {
        Self {
            pending: DiscRatings::default(),
            committed: None,
            throw_style: ThrowStyle::default(),
            observers: Vec::new(),
        }
    }
}

impl fmt::Debug for FlightSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlightSession")
            .field("pending", &self.pending)
            .field("committed", &self.committed)
            .field("throw_style", &self.throw_style)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl FlightSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &DiscRatings {
        &self.pending
    }

    pub fn committed(&self) -> Option<&DiscRatings> {
        self.committed.as_ref()
    }

    pub fn throw_style(&self) -> ThrowStyle {
        self.throw_style
    }

    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    /// Stores a raw form entry into one pending field.
    ///
    /// Never fails: anything that does not start with a number becomes 0.
    pub fn update_field(&mut self, field: DiscField, raw: &str) {
        let value = parse_field_value(raw);
        if !field.in_soft_range(value) {
            let (min, max) = field.soft_range();
            warn!(
                "{} = {} is outside the usual {}..={} range, keeping it anyway",
                field, value, min, max
            );
        }
        self.pending.set(field, value);
        debug!("pending {} <- {:?} ({})", field, raw, value);
        self.notify(SessionChange::PendingEdited(field));
    }

    /// Like [`update_field`](Self::update_field) but addressed by field name.
    pub fn update_field_by_name(&mut self, name: &str, raw: &str) -> DfResult<()> {
        let field = DiscField::from_str(name.trim())
            .map_err(|_| DiscForgeError::UnknownField(name.to_string()))?;
        self.update_field(field, raw);
        Ok(())
    }

    /// Replaces every pending field at once (e.g. from a disc file).
    pub fn set_pending(&mut self, disc: DiscRatings) {
        self.pending = disc;
        self.notify(SessionChange::PendingReplaced);
    }

    /// Submits the pending form. The committed disc is replaced wholesale.
    pub fn commit(&mut self) {
        self.committed = Some(self.pending);
        debug!("committed {:?}", self.pending);
        self.notify(SessionChange::Committed);
    }

    pub fn set_throw_style(&mut self, style: ThrowStyle) {
        self.throw_style = style;
        debug!("throw style -> {}", style);
        self.notify(SessionChange::ThrowStyleChanged);
    }

    /// Current flight outputs, or `None` until something has been committed.
    ///
    /// Pure over (committed disc, throw style): calling it repeatedly
    /// without changes yields identical results.
    pub fn derive_outputs(&self) -> Option<FlightResult> {
        self.committed
            .as_ref()
            .map(|disc| compute_flight(disc, self.throw_style))
    }

    fn notify(&self, change: SessionChange) {
        for observer in &self.observers {
            observer.on_change(self, change);
        }
    }
}

/// Reads the leading number of a form entry, the way browsers read
/// numeric inputs: `"12abc"` -> 12, `" .5"` -> 0.5, `"abc"` / `""` -> 0.
pub fn parse_field_value(raw: &str) -> f64 {
    let value = leading_number(raw.trim_start()).unwrap_or(0.0);
    // NaN and -0 collapse to 0
    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value
    }
}

fn leading_number(s: &str) -> Option<f64> {
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    if rest.starts_with("Infinity") {
        return Some(sign * f64::INFINITY);
    }
    let len = numeric_prefix_len(rest);
    if len == 0 {
        return None;
    }
    rest[..len].parse::<f64>().ok().map(|v| sign * v)
}

// Length of the longest `digits [. digits] [e [sign] digits]` prefix.
fn numeric_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let count_digits = |from: usize| b[from..].iter().take_while(|c| c.is_ascii_digit()).count();

    let int_digits = count_digits(0);
    let mut end = int_digits;

    if b.get(end) == Some(&b'.') {
        let frac_digits = count_digits(end + 1);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        } else if int_digits == 0 {
            return 0;
        }
    }
    if end == 0 {
        return 0;
    }

    if matches!(b.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(b.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(exp.min(b.len()));
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Stability;
    use std::sync::{Arc, Mutex};

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_field_value("7"), 7.0);
        assert_eq!(parse_field_value("-2.5"), -2.5);
        assert_eq!(parse_field_value("  3"), 3.0);
        assert_eq!(parse_field_value(".5"), 0.5);
        assert_eq!(parse_field_value("1e1"), 10.0);
    }

    #[test]
    fn parses_leading_prefix_only() {
        assert_eq!(parse_field_value("12abc"), 12.0);
        assert_eq!(parse_field_value("4."), 4.0);
        assert_eq!(parse_field_value("1e"), 1.0);
        assert_eq!(parse_field_value("2.5.1"), 2.5);
    }

    #[test]
    fn garbage_becomes_zero() {
        for raw in ["", "abc", "-", ".", "--5", "nan", "inf", "-0"] {
            let v = parse_field_value(raw);
            assert_eq!(v, 0.0, "{raw:?}");
            assert!(v.is_sign_positive(), "{raw:?}");
        }
    }

    #[test]
    fn infinity_is_kept() {
        assert_eq!(parse_field_value("Infinity"), f64::INFINITY);
        assert_eq!(parse_field_value("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn edits_only_touch_pending() {
        let mut s = FlightSession::new();
        s.update_field(DiscField::Speed, "12");
        assert_eq!(s.pending().speed, 12.0);
        assert_eq!(s.pending().glide, 5.0);
        assert!(s.committed().is_none());
        assert!(s.derive_outputs().is_none());
    }

    #[test]
    fn unknown_field_name_is_rejected() {
        let mut s = FlightSession::new();
        let err = s.update_field_by_name("weight", "175").unwrap_err();
        assert!(matches!(err, DiscForgeError::UnknownField(name) if name == "weight"));
        s.update_field_by_name("FADE", "4").unwrap();
        assert_eq!(s.pending().fade, 4.0);
    }

    #[test]
    fn commit_snapshots_pending() {
        let mut s = FlightSession::new();
        s.commit();
        s.update_field(DiscField::Fade, "4");
        let out = s.derive_outputs().unwrap();
        assert_eq!(out.stability, Stability::Stable);
        s.commit();
        assert_eq!(s.derive_outputs().unwrap().stability, Stability::Stable);
        s.update_field(DiscField::Turn, "0");
        s.commit();
        assert_eq!(s.derive_outputs().unwrap().stability, Stability::Overstable);
    }

    struct Recorder(Arc<Mutex<Vec<(SessionChange, bool)>>>);

    impl SessionObserver for Recorder {
        fn on_change(&self, session: &FlightSession, change: SessionChange) {
            let has_output = session.derive_outputs().is_some();
            self.0.lock().unwrap().push((change, has_output));
        }
    }

    #[test]
    fn observers_see_every_change_after_it_lands() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut s = FlightSession::new();
        s.subscribe(Box::new(Recorder(log.clone())));

        s.update_field(DiscField::Glide, "6");
        s.set_throw_style(ThrowStyle::RightHandForehand);
        s.set_pending(DiscRatings::new(9.0, 4.0, 0.0, 3.0));
        s.commit();

        let log = log.lock().unwrap();
        assert_eq!(
            *log,
            vec![
                (SessionChange::PendingEdited(DiscField::Glide), false),
                (SessionChange::ThrowStyleChanged, false),
                (SessionChange::PendingReplaced, false),
                (SessionChange::Committed, true),
            ]
        );
    }
}
