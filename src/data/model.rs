use serde::{Deserialize, Serialize};

/// Regulatory threshold every district reading is compared against (µg/m³).
pub const DISTRICT_TARGET: f64 = 35.0;

// ---------------------------------------------------------------------------
// PollutionSample – one point of the 24 h trend
// ---------------------------------------------------------------------------

/// A single pollutant reading at a time-of-day label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutionSample {
    /// Time-of-day label, e.g. `"08:00"`.
    pub time: String,
    /// PM2.5 concentration in µg/m³.
    pub pm25: f64,
    /// NO2 concentration in µg/m³.
    pub no2: f64,
}

// ---------------------------------------------------------------------------
// DistrictReading – one bar of the district comparison
// ---------------------------------------------------------------------------

/// A district's measured value next to its regulatory target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictReading {
    pub name: String,
    pub value: f64,
    #[serde(default = "default_target")]
    pub target: f64,
}

fn default_target() -> f64 {
    DISTRICT_TARGET
}

impl DistrictReading {
    pub fn new(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
            target: DISTRICT_TARGET,
        }
    }

    /// Strictly above target; a reading equal to the target is compliant.
    pub fn exceeds_target(&self) -> bool {
        self.value > self.target
    }
}

// ---------------------------------------------------------------------------
// WeatherSnapshot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// km/h.
    pub wind_speed: f64,
}

// ---------------------------------------------------------------------------
// CommunityStats – the non-pollution stat cards
// ---------------------------------------------------------------------------

/// Figures shown on the participation cards, with their month-over-month
/// deltas in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityStats {
    pub aqi_delta_pct: Option<f64>,
    /// CO₂ reduced this month.
    pub impact: f64,
    pub impact_delta_pct: Option<f64>,
    pub participants: f64,
    pub participants_delta_pct: Option<f64>,
    pub ranking: u32,
    pub ranking_district: String,
}

// ---------------------------------------------------------------------------
// DashboardData – everything the screen is built from
// ---------------------------------------------------------------------------

/// The complete, immutable input of the view assembler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub current_aqi: f64,
    pub pollution: Vec<PollutionSample>,
    pub districts: Vec<DistrictReading>,
    pub weather: WeatherSnapshot,
    pub community: CommunityStats,
}

impl DashboardData {
    /// Districts whose reading is above their target, in input order.
    pub fn districts_over_target(&self) -> impl Iterator<Item = &DistrictReading> {
        self.districts.iter().filter(|d| d.exceeds_target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_equal_to_target_does_not_exceed() {
        assert!(!DistrictReading::new("Centro", 35.0).exceeds_target());
        assert!(DistrictReading::new("Centro", 35.1).exceeds_target());
        assert!(!DistrictReading::new("Centro", 12.0).exceeds_target());
    }

    #[test]
    fn missing_target_defaults_to_regulatory_value() {
        let d: DistrictReading =
            serde_json::from_str(r#"{ "name": "Maipú", "value": 40 }"#).unwrap();
        assert_eq!(d.target, DISTRICT_TARGET);
        assert!(d.exceeds_target());
    }
}
