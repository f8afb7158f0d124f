use super::model::{
    CommunityStats, DashboardData, DistrictReading, PollutionSample, WeatherSnapshot,
};

// ---------------------------------------------------------------------------
// Built-in sample data
// ---------------------------------------------------------------------------

const POLLUTION: [(&str, f64, f64); 6] = [
    ("00:00", 45.0, 30.0),
    ("04:00", 38.0, 25.0),
    ("08:00", 52.0, 35.0),
    ("12:00", 63.0, 45.0),
    ("16:00", 58.0, 40.0),
    ("20:00", 48.0, 32.0),
];

const DISTRICTS: [(&str, f64); 5] = [
    ("Las Condes", 42.0),
    ("Providencia", 38.0),
    ("Santiago", 55.0),
    ("Ñuñoa", 45.0),
    ("La Florida", 50.0),
];

impl DashboardData {
    /// The dataset the dashboard shows when nothing else is loaded.
    pub fn sample() -> Self {
        DashboardData {
            current_aqi: 63.0,
            pollution: POLLUTION
                .iter()
                .map(|&(time, pm25, no2)| PollutionSample {
                    time: time.to_string(),
                    pm25,
                    no2,
                })
                .collect(),
            districts: DISTRICTS
                .iter()
                .map(|&(name, value)| DistrictReading::new(name, value))
                .collect(),
            weather: WeatherSnapshot {
                temperature: 24.0,
                humidity: 65.0,
                wind_speed: 12.0,
            },
            community: CommunityStats::default(),
        }
    }
}

impl Default for CommunityStats {
    fn default() -> Self {
        CommunityStats {
            aqi_delta_pct: Some(12.0),
            impact: 128.5,
            impact_delta_pct: Some(8.0),
            participants: 1234.0,
            participants_delta_pct: Some(15.0),
            ranking: 42,
            ranking_district: "Las Condes".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn every_sample_district_exceeds_target() {
        let data = DashboardData::sample();
        let over: Vec<&str> = data
            .districts_over_target()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(
            over,
            ["Las Condes", "Providencia", "Santiago", "Ñuñoa", "La Florida"]
        );
    }

    #[test]
    fn district_names_are_unique() {
        let data = DashboardData::sample();
        let names: BTreeSet<&str> = data.districts.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names.len(), data.districts.len());
    }

    #[test]
    fn current_aqi_matches_midday_peak() {
        let data = DashboardData::sample();
        let peak = data
            .pollution
            .iter()
            .map(|s| s.pm25)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(data.current_aqi, peak);
    }
}
