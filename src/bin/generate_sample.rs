use anyhow::{Context, Result};
use serde_json::json;

/// Rush-hour bump centred on `hour`.
fn peak(hour: f64, centre: f64, width: f64, height: f64) -> f64 {
    height * (-(hour - centre).powi(2) / (2.0 * width.powi(2))).exp()
}

/// PM2.5 and NO2 for an hour of the day: a baseline plus morning and evening
/// traffic peaks, NO2 tracking traffic more closely than particulates.
fn diurnal(hour: f64, rng: &mut SimpleRng) -> (f64, f64) {
    let traffic = peak(hour, 8.0, 1.8, 1.0) + peak(hour, 19.0, 2.2, 0.8);
    let pm25 = 32.0 + 38.0 * traffic + peak(hour, 13.0, 3.0, 14.0) + rng.gauss(0.0, 2.5);
    let no2 = 18.0 + 34.0 * traffic + rng.gauss(0.0, 2.0);
    (pm25.max(0.0).round(), no2.max(0.0).round())
}

/// Seeded generator (splitmix64) so every run writes the same day.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Normally distributed noise around `mean`.
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // Hourly samples 00:00 → 23:00
    let series: Vec<(String, f64, f64)> = (0..24)
        .map(|h| {
            let (pm25, no2) = diurnal(h as f64, &mut rng);
            (format!("{h:02}:00"), pm25, no2)
        })
        .collect();

    // Districts scatter around the city-wide mean.
    let districts = [
        "Las Condes",
        "Providencia",
        "Santiago",
        "Ñuñoa",
        "La Florida",
        "Puente Alto",
        "Maipú",
        "Vitacura",
    ];
    let city_mean = series.iter().map(|s| s.1).sum::<f64>() / series.len() as f64;
    let district_rows: Vec<serde_json::Value> = districts
        .iter()
        .map(|name| {
            let value = (city_mean + rng.gauss(0.0, 9.0)).max(0.0).round();
            json!({ "name": name, "value": value, "target": 35.0 })
        })
        .collect();

    let current_aqi = series.last().map(|s| s.1).unwrap_or_default();

    let snapshot = json!({
        "current_aqi": current_aqi,
        "pollution": series
            .iter()
            .map(|(time, pm25, no2)| json!({ "time": time, "pm25": pm25, "no2": no2 }))
            .collect::<Vec<_>>(),
        "districts": district_rows,
        "weather": {
            "temperature": (21.0 + rng.gauss(0.0, 3.0)).round(),
            "humidity": (60.0 + rng.gauss(0.0, 8.0)).clamp(0.0, 100.0).round(),
            "wind_speed": (10.0 + rng.gauss(0.0, 4.0)).max(0.0).round(),
        },
    });

    let json_path = "sample_dashboard.json";
    let text = serde_json::to_string_pretty(&snapshot).context("serialising snapshot")?;
    std::fs::write(json_path, text).with_context(|| format!("writing {json_path}"))?;

    let csv_path = "sample_pollution.csv";
    let mut writer = csv::Writer::from_path(csv_path).with_context(|| format!("creating {csv_path}"))?;
    writer.write_record(["time", "pm25", "no2"])?;
    for (time, pm25, no2) in &series {
        writer.write_record([time.clone(), pm25.to_string(), no2.to_string()])?;
    }
    writer.flush().context("flushing CSV")?;

    println!(
        "Wrote {} hourly samples and {} districts to {json_path}, series to {csv_path}",
        series.len(),
        districts.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_day() {
        let a: Vec<(f64, f64)> = {
            let mut rng = SimpleRng::new(42);
            (0..24).map(|h| diurnal(h as f64, &mut rng)).collect()
        };
        let b: Vec<(f64, f64)> = {
            let mut rng = SimpleRng::new(42);
            (0..24).map(|h| diurnal(h as f64, &mut rng)).collect()
        };
        assert_eq!(a, b);
        assert!(a.iter().all(|&(pm25, no2)| pm25 >= 0.0 && no2 >= 0.0));
    }

    #[test]
    fn uniform_draws_stay_in_unit_interval() {
        let mut rng = SimpleRng::new(7);
        assert!((0..1000).map(|_| rng.next_f64()).all(|u| (0.0..1.0).contains(&u)));
    }
}
