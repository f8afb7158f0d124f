use serde::Serialize;

use crate::classify::{classify, gauge_fill, Tier, AQI_SCALE_MAX};
use crate::color::{self, Rgb};
use crate::data::model::DashboardData;
use crate::format::{card_decimals, format_number, Delta};

// ---------------------------------------------------------------------------
// Display records
// ---------------------------------------------------------------------------

pub const TITLE: &str = "Tablero Ambiental";
pub const SUBTITLE: &str = "Monitorea la calidad del aire y el impacto comunitario en tiempo real";

/// Which glyph a card shows in its accent badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardIcon {
    Alert,
    Leaf,
    People,
    Trophy,
}

impl CardIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            CardIcon::Alert => "⚠",
            CardIcon::Leaf => "🍃",
            CardIcon::People => "👥",
            CardIcon::Trophy => "🏆",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub icon: CardIcon,
    pub title: String,
    pub value: f64,
    pub decimals: usize,
    pub description: String,
    pub accent: Rgb,
    pub delta: Option<Delta>,
}

impl StatCard {
    /// The value as shown once counting has finished.
    pub fn formatted_value(&self) -> String {
        format_number(self.value, self.decimals)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeView {
    pub value: f64,
    pub max: f64,
    /// Arc fraction in `0..=1`.
    pub fill: f64,
    pub tier: Tier,
    pub color: Rgb,
    pub track: Rgb,
    pub label: String,
    pub advisory: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub color: Rgb,
    pub values: Vec<f64>,
}

/// The 24 h area chart: one x label per sample, shared by all series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendChart {
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictBar {
    pub name: String,
    pub value: f64,
    pub target: f64,
    pub exceeds_target: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictChart {
    pub title: String,
    pub bars: Vec<DistrictBar>,
    pub value_color: Rgb,
    pub target_color: Rgb,
}

impl DistrictChart {
    pub fn exceeding(&self) -> impl Iterator<Item = &DistrictBar> {
        self.bars.iter().filter(|b| b.exceeds_target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WeatherIcon {
    Sun,
    Droplets,
    Wind,
}

impl WeatherIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            WeatherIcon::Sun => "☀",
            WeatherIcon::Droplets => "💧",
            WeatherIcon::Wind => "🌬",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherTile {
    pub icon: WeatherIcon,
    pub value: String,
    pub caption: String,
}

/// Everything the screen renders, derived from one [`DashboardData`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<StatCard>,
    pub gauge: GaugeView,
    pub trend: TrendChart,
    pub districts: DistrictChart,
    pub weather_title: String,
    pub weather: Vec<WeatherTile>,
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Build the display records. Pure: the same data always yields the same view.
pub fn assemble(data: &DashboardData) -> DashboardView {
    DashboardView {
        title: TITLE.to_string(),
        subtitle: SUBTITLE.to_string(),
        cards: stat_cards(data),
        gauge: gauge(data.current_aqi),
        trend: trend_chart(data),
        districts: district_chart(data),
        weather_title: "Clima Actual".to_string(),
        weather: weather_tiles(data),
    }
}

fn stat_cards(data: &DashboardData) -> Vec<StatCard> {
    let aqi = classify(data.current_aqi);
    let community = &data.community;
    vec![
        StatCard {
            icon: CardIcon::Alert,
            title: "Calidad del Aire (AQI)".to_string(),
            value: data.current_aqi,
            decimals: card_decimals(data.current_aqi),
            description: aqi.tier.description().to_string(),
            accent: aqi.color,
            delta: community.aqi_delta_pct.map(Delta::new),
        },
        StatCard {
            icon: CardIcon::Leaf,
            title: "Tu Impacto".to_string(),
            value: community.impact,
            decimals: card_decimals(community.impact),
            description: "CO₂ reducido este mes".to_string(),
            accent: color::CARD_GREEN,
            delta: community.impact_delta_pct.map(Delta::new),
        },
        StatCard {
            icon: CardIcon::People,
            title: "Comunidad".to_string(),
            value: community.participants,
            decimals: card_decimals(community.participants),
            description: "Participantes activos".to_string(),
            accent: color::CARD_BLUE,
            delta: community.participants_delta_pct.map(Delta::new),
        },
        StatCard {
            icon: CardIcon::Trophy,
            title: "Tu Posición".to_string(),
            value: f64::from(community.ranking),
            decimals: 0,
            description: format!("En {}", community.ranking_district),
            accent: color::CARD_PURPLE,
            delta: None,
        },
    ]
}

fn gauge(aqi: f64) -> GaugeView {
    let c = classify(aqi);
    GaugeView {
        value: aqi,
        max: AQI_SCALE_MAX,
        fill: gauge_fill(aqi),
        tier: c.tier,
        color: c.color,
        track: color::TRACK,
        label: c.label.to_string(),
        advisory: c.tier.advisory().to_string(),
    }
}

fn trend_chart(data: &DashboardData) -> TrendChart {
    TrendChart {
        title: "Tendencias de Calidad del Aire (24 horas)".to_string(),
        labels: data.pollution.iter().map(|s| s.time.clone()).collect(),
        series: vec![
            Series {
                name: "PM2.5".to_string(),
                color: color::GREEN,
                values: data.pollution.iter().map(|s| s.pm25).collect(),
            },
            Series {
                name: "NO₂".to_string(),
                color: color::INDIGO,
                values: data.pollution.iter().map(|s| s.no2).collect(),
            },
        ],
    }
}

fn district_chart(data: &DashboardData) -> DistrictChart {
    DistrictChart {
        title: "Calidad del Aire por Comuna".to_string(),
        bars: data
            .districts
            .iter()
            .map(|d| DistrictBar {
                name: d.name.clone(),
                value: d.value,
                target: d.target,
                exceeds_target: d.exceeds_target(),
            })
            .collect(),
        value_color: color::GREEN,
        target_color: color::TRACK,
    }
}

fn weather_tiles(data: &DashboardData) -> Vec<WeatherTile> {
    let w = &data.weather;
    vec![
        WeatherTile {
            icon: WeatherIcon::Sun,
            value: format!("{}°C", format_number(w.temperature, card_decimals(w.temperature))),
            caption: "Temperatura".to_string(),
        },
        WeatherTile {
            icon: WeatherIcon::Droplets,
            value: format!("{}%", format_number(w.humidity, card_decimals(w.humidity))),
            caption: "Humedad".to_string(),
        },
        WeatherTile {
            icon: WeatherIcon::Wind,
            value: format_number(w.wind_speed, card_decimals(w.wind_speed)),
            caption: "Viento (km/h)".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembling_twice_is_byte_identical() {
        let data = DashboardData::sample();
        let a = serde_json::to_vec(&assemble(&data)).unwrap();
        let b = serde_json::to_vec(&assemble(&data)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sample_screen_shows_moderate_air() {
        let view = assemble(&DashboardData::sample());
        assert_eq!(view.gauge.tier, Tier::Moderate);
        assert_eq!(view.gauge.color, color::AMBER);
        assert_eq!(view.gauge.label, "Moderada");
        assert!((view.gauge.fill - 0.42).abs() < 1e-12);

        let aqi_card = &view.cards[0];
        assert_eq!(aqi_card.formatted_value(), "63");
        assert_eq!(aqi_card.description, "Calidad de aire moderada");
        assert_eq!(aqi_card.accent, color::AMBER);
        assert_eq!(aqi_card.delta.map(|d| d.format()).as_deref(), Some("+12%"));
    }

    #[test]
    fn cards_format_their_values() {
        let view = assemble(&DashboardData::sample());
        let shown: Vec<String> = view.cards.iter().map(StatCard::formatted_value).collect();
        assert_eq!(shown, ["63", "128.5", "1,234", "42"]);
        assert_eq!(view.cards[3].description, "En Las Condes");
        assert!(view.cards[3].delta.is_none());
    }

    #[test]
    fn every_sample_district_is_flagged() {
        let view = assemble(&DashboardData::sample());
        assert_eq!(view.districts.bars.len(), 5);
        assert_eq!(view.districts.exceeding().count(), 5);
        assert!(view.districts.bars.iter().all(|b| b.target == 35.0));
    }

    #[test]
    fn compliant_district_is_not_flagged() {
        let mut data = DashboardData::sample();
        data.districts[1].value = 35.0;
        let view = assemble(&data);
        let flagged: Vec<&str> = view.districts.exceeding().map(|b| b.name.as_str()).collect();
        assert_eq!(flagged, ["Las Condes", "Santiago", "Ñuñoa", "La Florida"]);
    }

    #[test]
    fn trend_series_share_labels() {
        let view = assemble(&DashboardData::sample());
        assert_eq!(view.trend.labels.first().map(String::as_str), Some("00:00"));
        for s in &view.trend.series {
            assert_eq!(s.values.len(), view.trend.labels.len());
        }
        assert_eq!(view.trend.series[0].values[3], 63.0);
        assert_eq!(view.trend.series[1].values[3], 45.0);
    }

    #[test]
    fn weather_tiles_carry_units() {
        let view = assemble(&DashboardData::sample());
        let values: Vec<&str> = view.weather.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, ["24°C", "65%", "12"]);
    }

    #[test]
    fn aqi_above_scale_is_unhealthy_with_full_gauge() {
        let mut data = DashboardData::sample();
        data.current_aqi = 212.0;
        let view = assemble(&data);
        assert_eq!(view.gauge.tier, Tier::Unhealthy);
        assert_eq!(view.gauge.fill, 1.0);
        assert_eq!(view.gauge.value, 212.0);
        assert_eq!(view.cards[0].accent, color::RED);
    }
}
