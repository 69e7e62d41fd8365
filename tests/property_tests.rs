use discforge::model::{
    classify_stability, compute_flight, estimate_distance, flight_path, DiscRatings, PowerLevel,
    Stability, ThrowStyle,
};
use discforge::session::{parse_field_value, FlightSession};
use proptest::prelude::*;

// --- STRATEGIES ---
prop_compose! {
    fn arb_disc()(
        speed in -2.0..20.0f64,
        glide in -2.0..10.0f64,
        turn in -8.0..3.0f64,
        fade in -2.0..8.0f64
    ) -> DiscRatings {
        DiscRatings { speed, glide, turn, fade }
    }
}

fn arb_style() -> impl Strategy<Value = ThrowStyle> {
    prop_oneof![
        Just(ThrowStyle::RightHandBackhand),
        Just(ThrowStyle::RightHandForehand)
    ]
}

fn arb_level() -> impl Strategy<Value = PowerLevel> {
    prop_oneof![
        Just(PowerLevel::Under),
        Just(PowerLevel::Normal),
        Just(PowerLevel::Over)
    ]
}

proptest! {
    #[test]
    fn understable_partition(turn in -10.0..-1.0001f64, fade in -5.0..1.9999f64) {
        prop_assert_eq!(classify_stability(turn, fade), Stability::Understable);
    }

    #[test]
    fn stable_low_turn_partition(turn in -10.0..-1.0001f64, fade in 2.0..10.0f64) {
        prop_assert_eq!(classify_stability(turn, fade), Stability::Stable);
    }

    #[test]
    fn stable_high_turn_partition(turn in -1.0..10.0f64, fade in -5.0..2.9999f64) {
        prop_assert_eq!(classify_stability(turn, fade), Stability::Stable);
    }

    #[test]
    fn overstable_partition(turn in -1.0..10.0f64, fade in 3.0..10.0f64) {
        prop_assert_eq!(classify_stability(turn, fade), Stability::Overstable);
    }

    #[test]
    fn distance_is_rounded_linear_model(disc in arb_disc(), level in arb_level()) {
        let exact = (disc.speed * 30.0 + disc.glide * 15.0) * level.factor();
        let got = estimate_distance(disc.speed, disc.glide, level.factor());
        prop_assert!((got - exact).abs() <= 0.5);
    }

    #[test]
    fn forehand_mirrors_backhand(disc in arb_disc(), level in arb_level()) {
        let f = level.factor();
        let bh = flight_path(disc.turn, disc.fade, ThrowStyle::RightHandBackhand, f);
        let fh = flight_path(disc.turn, disc.fade, ThrowStyle::RightHandForehand, f);
        let cx = bh.start.x;
        for (a, b) in [(bh.start, fh.start), (bh.c1, fh.c1), (bh.c2, fh.c2), (bh.end, fh.end)] {
            prop_assert!(((a.x - cx) + (b.x - cx)).abs() < 1e-9);
            prop_assert_eq!(a.y, b.y);
        }
    }

    #[test]
    fn derive_outputs_is_deterministic(disc in arb_disc(), style in arb_style()) {
        let mut session = FlightSession::new();
        session.set_pending(disc);
        session.set_throw_style(style);
        session.commit();
        let first = session.derive_outputs();
        let second = session.derive_outputs();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, Some(compute_flight(&disc, style)));
    }

    #[test]
    fn form_entry_never_fails(raw in ".*") {
        let v = parse_field_value(&raw);
        prop_assert!(!v.is_nan());
    }

    #[test]
    fn numeric_entries_round_trip(v in -1000.0..1000.0f64) {
        prop_assert_eq!(parse_field_value(&v.to_string()), if v == 0.0 { 0.0 } else { v });
    }
}
