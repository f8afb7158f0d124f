use serde::Serialize;

use crate::color::{self, Rgb};

// ---------------------------------------------------------------------------
// AQI classification
// ---------------------------------------------------------------------------

/// Upper end of the gauge scale.
pub const AQI_SCALE_MAX: f64 = 150.0;

/// Cut points: below `GOOD_BELOW` is good, below `MODERATE_BELOW` moderate.
pub const GOOD_BELOW: f64 = 50.0;
pub const MODERATE_BELOW: f64 = 100.0;

/// Severity tier, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Tier {
    Good,
    Moderate,
    Unhealthy,
}

impl Tier {
    pub fn color(self) -> Rgb {
        match self {
            Tier::Good => color::GREEN,
            Tier::Moderate => color::AMBER,
            Tier::Unhealthy => color::RED,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Good => "Buena",
            Tier::Moderate => "Moderada",
            Tier::Unhealthy => "Insalubre",
        }
    }

    /// Health advisory shown under the gauge.
    pub fn advisory(self) -> &'static str {
        match self {
            Tier::Good => "La calidad del aire es satisfactoria para actividades al aire libre",
            Tier::Moderate => "Las personas sensibles deben limitar actividades al aire libre",
            Tier::Unhealthy => "Toda la población debe reducir el esfuerzo prolongado al aire libre",
        }
    }

    /// One-line description used on the AQI stat card.
    pub fn description(self) -> &'static str {
        match self {
            Tier::Good => "Calidad de aire buena",
            Tier::Moderate => "Calidad de aire moderada",
            Tier::Unhealthy => "Calidad de aire insalubre",
        }
    }
}

/// Result of classifying one AQI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub tier: Tier,
    pub color: Rgb,
    pub label: &'static str,
}

/// Map an AQI value to its tier. Total: anything that is not below a cut
/// point (including NaN and values past the gauge scale) is unhealthy.
pub fn classify(value: f64) -> Classification {
    let tier = if value < GOOD_BELOW {
        Tier::Good
    } else if value < MODERATE_BELOW {
        Tier::Moderate
    } else {
        Tier::Unhealthy
    };
    Classification {
        tier,
        color: tier.color(),
        label: tier.label(),
    }
}

/// Fraction of the gauge arc to fill, in `0..=1`. Only the visual fill is
/// clamped; [`classify`] sees the raw value.
pub fn gauge_fill(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, AQI_SCALE_MAX) / AQI_SCALE_MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_exclusive() {
        assert_eq!(classify(49.9).tier, Tier::Good);
        assert_eq!(classify(50.0).tier, Tier::Moderate);
        assert_eq!(classify(99.9).tier, Tier::Moderate);
        assert_eq!(classify(100.0).tier, Tier::Unhealthy);
    }

    #[test]
    fn classification_is_total() {
        assert_eq!(classify(0.0).tier, Tier::Good);
        assert_eq!(classify(150.0).tier, Tier::Unhealthy);
        assert_eq!(classify(480.0).tier, Tier::Unhealthy);
        assert_eq!(classify(f64::INFINITY).tier, Tier::Unhealthy);
        assert_eq!(classify(f64::NAN).tier, Tier::Unhealthy);
    }

    #[test]
    fn tiers_never_decrease_with_value() {
        let mut prev = Tier::Good;
        for i in 0..=3000 {
            let tier = classify(i as f64 * 0.1).tier;
            assert!(tier >= prev, "tier dropped at {}", i as f64 * 0.1);
            prev = tier;
        }
    }

    #[test]
    fn moderate_reading_end_to_end() {
        let c = classify(63.0);
        assert_eq!(c.tier, Tier::Moderate);
        assert_eq!(c.color, color::AMBER);
        assert_eq!(c.label, "Moderada");
    }

    #[test]
    fn gauge_fill_clamps_only_the_visual() {
        assert_eq!(gauge_fill(0.0), 0.0);
        assert_eq!(gauge_fill(75.0), 0.5);
        assert_eq!(gauge_fill(150.0), 1.0);
        assert_eq!(gauge_fill(600.0), 1.0);
        assert_eq!(gauge_fill(-5.0), 0.0);
        assert_eq!(gauge_fill(f64::NAN), 0.0);
        assert_eq!(classify(600.0).tier, Tier::Unhealthy);
    }

    #[test]
    fn gauge_fill_is_monotonic() {
        let fills: Vec<f64> = (0..=400).map(|v| gauge_fill(v as f64)).collect();
        assert!(fills.windows(2).all(|w| w[0] <= w[1]));
        assert!((gauge_fill(63.0) - 0.42).abs() < 1e-12);
    }
}
