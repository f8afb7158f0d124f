use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::DashboardData;
use super::validate::{RawPollution, RawSnapshot, SampleIssue, Validator};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// A loaded snapshot and whatever validation had to say about it.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub data: DashboardData,
    pub issues: Vec<SampleIssue>,
}

/// Load a dashboard snapshot from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – a complete snapshot (see [`load_json_str`])
/// * `.csv`  – a `time,pm25,no2` pollution series; every other section is
///   taken from the built-in sample data
pub fn load_file(path: &Path) -> Result<LoadReport> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let text = match ext.as_str() {
        "json" | "csv" => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    let report = if ext == "json" {
        load_json_str(&text)?
    } else {
        load_csv_str(&text)?
    };

    log::info!(
        "Loaded {} ({} samples, {} districts, {} over target, {} issues)",
        path.display(),
        report.data.pollution.len(),
        report.data.districts.len(),
        report.data.districts_over_target().count(),
        report.issues.len()
    );
    Ok(report)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// {
///   "current_aqi": 63,
///   "pollution": [ { "time": "00:00", "pm25": 45, "no2": 30 }, ... ],
///   "districts": [ { "name": "Santiago", "value": 55, "target": 35 }, ... ],
///   "weather": { "temperature": 24, "humidity": 65, "wind_speed": 12 },
///   "community": { ... }
/// }
/// ```
///
/// `community`, `weather`, `current_aqi` and each district's `target` are
/// optional. At least one usable pollution sample is required, as for CSV.
pub fn load_json_str(text: &str) -> Result<LoadReport> {
    let raw: RawSnapshot = serde_json::from_str(text).context("parsing JSON snapshot")?;
    let mut validator = Validator::default();
    let data = validator.snapshot(raw, &DashboardData::sample());
    if data.pollution.is_empty() {
        bail!("JSON snapshot contains no usable pollution samples");
    }
    Ok(LoadReport {
        data,
        issues: validator.issues,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row `time,pm25,no2`, one sample per row.
pub fn load_csv_str(text: &str) -> Result<LoadReport> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut validator = Validator::default();
    let mut pollution = Vec::new();

    for (row_no, result) in reader.deserialize::<RawPollution>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        if let Some(sample) = validator.pollution(row_no, raw) {
            pollution.push(sample);
        }
    }

    if pollution.is_empty() {
        bail!("CSV contains no usable pollution samples");
    }

    Ok(LoadReport {
        data: DashboardData {
            pollution,
            ..DashboardData::sample()
        },
        issues: validator.issues,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_snapshot_round_trips_sample_data() {
        let sample = DashboardData::sample();
        let text = serde_json::to_string(&sample).unwrap();
        let report = load_json_str(&text).unwrap();
        assert_eq!(report.data, sample);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn json_record_without_value_is_skipped() {
        let text = r#"{
            "current_aqi": 112,
            "pollution": [
                { "time": "00:00", "pm25": 80, "no2": 41 },
                { "time": "04:00", "no2": 38 }
            ],
            "districts": [
                { "name": "Puente Alto", "value": 71 },
                { "name": "Vitacura" }
            ]
        }"#;
        let report = load_json_str(text).unwrap();
        assert_eq!(report.data.current_aqi, 112.0);
        assert_eq!(report.data.pollution.len(), 1);
        assert_eq!(report.data.districts.len(), 1);
        assert_eq!(report.data.districts[0].target, 35.0);
        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.data.weather, DashboardData::sample().weather);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(load_json_str("{ not json").is_err());
        assert!(load_json_str(r#"{ "pollution": 3 }"#).is_err());
    }

    #[test]
    fn json_without_samples_is_an_error() {
        let err = load_json_str(r#"{ "current_aqi": 40 }"#).unwrap_err();
        assert!(err.to_string().contains("no usable pollution samples"));
        let text = r#"{ "pollution": [ { "time": "00:00", "no2": 12 } ] }"#;
        assert!(load_json_str(text).is_err());
    }

    #[test]
    fn partial_community_loads_with_issues() {
        let text = r#"{
            "pollution": [ { "time": "00:00", "pm25": 20, "no2": 11 } ],
            "districts": [ { "name": "Recoleta", "value": 30, "target": -50 } ],
            "community": { "impact": 90.0, "participants": -3 }
        }"#;
        let report = load_json_str(text).unwrap();
        let sample = DashboardData::sample().community;
        assert_eq!(report.data.community.impact, 90.0);
        assert_eq!(report.data.community.participants, 0.0);
        assert_eq!(report.data.community.ranking, sample.ranking);
        assert_eq!(report.data.districts[0].target, 0.0);
        // ranking + ranking_district missing, participants + target clamped
        assert_eq!(report.issues.len(), 4);
    }

    #[test]
    fn csv_series_replaces_only_pollution() {
        let text = "time,pm25,no2\n06:00,31,22\n07:00,,20\n08:00,44.5,-1\n";
        let report = load_csv_str(text).unwrap();
        let times: Vec<&str> = report.data.pollution.iter().map(|s| s.time.as_str()).collect();
        assert_eq!(times, ["06:00", "08:00"]);
        assert_eq!(report.data.pollution[1].pm25, 44.5);
        assert_eq!(report.data.pollution[1].no2, 0.0);
        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.data.districts, DashboardData::sample().districts);
    }

    #[test]
    fn csv_without_samples_is_an_error() {
        assert!(load_csv_str("time,pm25,no2\n").is_err());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("readings.parquet")).unwrap_err();
        assert!(err.to_string().contains(".parquet"));
    }

    #[test]
    fn load_file_reads_from_disk() {
        let path = std::env::temp_dir().join(format!("aire-load-{}.csv", std::process::id()));
        std::fs::write(&path, "time,pm25,no2\n00:00,12,9\n").unwrap();
        let report = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(report.data.pollution.len(), 1);
        assert_eq!(report.data.pollution[0].pm25, 12.0);
    }
}
