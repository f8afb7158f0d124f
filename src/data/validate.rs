use std::collections::BTreeSet;

use serde::Deserialize;
use thiserror::Error;

use super::model::{
    CommunityStats, DashboardData, DistrictReading, PollutionSample, WeatherSnapshot,
    DISTRICT_TARGET,
};
use crate::classify::AQI_SCALE_MAX;

// ---------------------------------------------------------------------------
// Issues found while validating a loaded snapshot
// ---------------------------------------------------------------------------

/// A problem with one record of a loaded snapshot. None of these abort the
/// load: a missing field drops the record (or, for the weather and community
/// sections, falls back to the built-in value), duplicates are dropped, and
/// out-of-range values are clamped for display and reported.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleIssue {
    #[error("{record}: missing field '{field}'")]
    MissingField { record: String, field: &'static str },

    #[error("{record}: {field} = {value} out of range, shown as {shown}")]
    OutOfRange {
        record: String,
        field: &'static str,
        value: f64,
        shown: f64,
    },

    #[error("district '{name}' listed more than once, later entry skipped")]
    DuplicateDistrict { name: String },
}

// ---------------------------------------------------------------------------
// Raw (untrusted) record shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct RawPollution {
    pub time: Option<String>,
    pub pm25: Option<f64>,
    pub no2: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawDistrict {
    pub name: Option<String>,
    pub value: Option<f64>,
    pub target: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawWeather {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCommunity {
    pub aqi_delta_pct: Option<f64>,
    pub impact: Option<f64>,
    pub impact_delta_pct: Option<f64>,
    pub participants: Option<f64>,
    pub participants_delta_pct: Option<f64>,
    pub ranking: Option<u32>,
    pub ranking_district: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawSnapshot {
    pub current_aqi: Option<f64>,
    #[serde(default)]
    pub pollution: Vec<RawPollution>,
    #[serde(default)]
    pub districts: Vec<RawDistrict>,
    pub weather: Option<RawWeather>,
    pub community: Option<RawCommunity>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Collects issues while turning raw records into trusted ones.
#[derive(Debug, Default)]
pub struct Validator {
    pub issues: Vec<SampleIssue>,
}

impl Validator {
    fn report(&mut self, issue: SampleIssue) {
        log::warn!("{issue}");
        self.issues.push(issue);
    }

    fn require<T>(&mut self, record: &str, field: &'static str, v: Option<T>) -> Option<T> {
        if v.is_none() {
            self.report(SampleIssue::MissingField {
                record: record.to_string(),
                field,
            });
        }
        v
    }

    /// Clamp `value` into `lo..=hi`; non-finite values become `lo`.
    fn clamp(&mut self, record: &str, field: &'static str, value: f64, lo: f64, hi: f64) -> f64 {
        let shown = if value.is_finite() { value.clamp(lo, hi) } else { lo };
        if shown != value {
            self.report(SampleIssue::OutOfRange {
                record: record.to_string(),
                field,
                value,
                shown,
            });
        }
        shown
    }

    pub fn pollution(&mut self, index: usize, raw: RawPollution) -> Option<PollutionSample> {
        let record = format!("pollution[{index}]");
        let time = self.require(&record, "time", raw.time)?;
        let pm25 = self.require(&record, "pm25", raw.pm25)?;
        let no2 = self.require(&record, "no2", raw.no2)?;
        Some(PollutionSample {
            pm25: self.clamp(&record, "pm25", pm25, 0.0, f64::MAX),
            no2: self.clamp(&record, "no2", no2, 0.0, f64::MAX),
            time,
        })
    }

    pub fn districts(&mut self, raws: Vec<RawDistrict>) -> Vec<DistrictReading> {
        let mut seen = BTreeSet::new();
        let mut out = Vec::with_capacity(raws.len());
        for (i, raw) in raws.into_iter().enumerate() {
            let record = format!("districts[{i}]");
            let Some(name) = self.require(&record, "name", raw.name) else {
                continue;
            };
            let Some(value) = self.require(&record, "value", raw.value) else {
                continue;
            };
            if !seen.insert(name.clone()) {
                self.report(SampleIssue::DuplicateDistrict { name });
                continue;
            }
            let value = self.clamp(&record, "value", value, 0.0, f64::MAX);
            let target = match raw.target {
                Some(t) => self.clamp(&record, "target", t, 0.0, f64::MAX),
                None => DISTRICT_TARGET,
            };
            out.push(DistrictReading { name, value, target });
        }
        out
    }

    /// Missing weather fields fall back to `fallback`, since the widget has
    /// no way to show a partial snapshot.
    pub fn weather(&mut self, raw: RawWeather, fallback: &WeatherSnapshot) -> WeatherSnapshot {
        let record = "weather";
        let temperature = self
            .require(record, "temperature", raw.temperature)
            .unwrap_or(fallback.temperature);
        let humidity = self
            .require(record, "humidity", raw.humidity)
            .unwrap_or(fallback.humidity);
        let wind_speed = self
            .require(record, "wind_speed", raw.wind_speed)
            .unwrap_or(fallback.wind_speed);
        WeatherSnapshot {
            temperature,
            humidity: self.clamp(record, "humidity", humidity, 0.0, 100.0),
            wind_speed: self.clamp(record, "wind_speed", wind_speed, 0.0, f64::MAX),
        }
    }

    /// Same fallback rule as [`Validator::weather`]. Deltas are optional on
    /// the cards, so an absent delta is not an issue.
    pub fn community(&mut self, raw: RawCommunity, fallback: &CommunityStats) -> CommunityStats {
        let record = "community";
        let impact = self
            .require(record, "impact", raw.impact)
            .unwrap_or(fallback.impact);
        let participants = self
            .require(record, "participants", raw.participants)
            .unwrap_or(fallback.participants);
        let ranking = self
            .require(record, "ranking", raw.ranking)
            .unwrap_or(fallback.ranking);
        let ranking_district = self
            .require(record, "ranking_district", raw.ranking_district)
            .unwrap_or_else(|| fallback.ranking_district.clone());
        CommunityStats {
            aqi_delta_pct: raw.aqi_delta_pct,
            impact: self.clamp(record, "impact", impact, 0.0, f64::MAX),
            impact_delta_pct: raw.impact_delta_pct,
            participants: self.clamp(record, "participants", participants, 0.0, f64::MAX),
            participants_delta_pct: raw.participants_delta_pct,
            ranking,
            ranking_district,
        }
    }

    /// The AQI is flagged when it leaves the gauge scale but passed through
    /// unchanged: classification uses the raw value, only the gauge clamps.
    pub fn aqi(&mut self, value: f64) -> f64 {
        if !(0.0..=AQI_SCALE_MAX).contains(&value) {
            self.report(SampleIssue::OutOfRange {
                record: "current_aqi".to_string(),
                field: "current_aqi",
                value,
                shown: value.clamp(0.0, AQI_SCALE_MAX),
            });
        }
        value
    }

    /// Build a dashboard from a raw snapshot; absent sections come from `base`.
    pub fn snapshot(&mut self, raw: RawSnapshot, base: &DashboardData) -> DashboardData {
        let current_aqi = match raw.current_aqi {
            Some(v) => self.aqi(v),
            None => base.current_aqi,
        };
        let pollution = raw
            .pollution
            .into_iter()
            .enumerate()
            .filter_map(|(i, r)| self.pollution(i, r))
            .collect();
        let districts = self.districts(raw.districts);
        let weather = match raw.weather {
            Some(w) => self.weather(w, &base.weather),
            None => base.weather.clone(),
        };
        DashboardData {
            current_aqi,
            pollution,
            districts,
            weather,
            community: match raw.community {
                Some(c) => self.community(c, &base.community),
                None => base.community.clone(),
            },
        }
    }
}
