//! Shared test helpers.
#![allow(dead_code)]

use aya::domain::entities::coordinates::Coordinates;
use aya::domain::entities::weather::{CurrentConditions, HourlySeries, WeatherSnapshot};
use aya::domain::ports::config_store::ConfigStore;
use aya::infrastructure::config::memory::InMemoryConfigStore;
use aya::infrastructure::forecast::fixed::StaticWeatherProvider;
use aya::infrastructure::geocoding::fixed::StaticGeoProvider;
use aya::infrastructure::ip::fixed::StaticIpLocator;
use aya::infrastructure::plot::ascii::AsciiPlotter;
use aya::Aya;
use std::sync::Arc;

pub fn san_diego() -> Coordinates {
    Coordinates::new("32.7", "-117.1", "San Diego")
}

/// 48 hourly entries from 2024-05-16T00:00; temperature at index `i` is
/// `10 + i / 4`.
pub fn two_day_hourly() -> HourlySeries {
    let timestamps: Vec<String> = (0..48)
        .map(|i| format!("2024-05-{:02}T{:02}:00", 16 + i / 24, i % 24))
        .collect();
    HourlySeries {
        temperatures_c: (0..48).map(|i| 10.0 + i as f64 / 4.0).collect(),
        precipitation_probability_pct: (0..48).map(|i| Some((i * 2) as u8)).collect(),
        cloud_cover_pct: vec![Some(50); 48],
        timestamps,
    }
}

pub fn snapshot_at(now: &str, temperature_c: f64, hourly: HourlySeries) -> WeatherSnapshot {
    WeatherSnapshot::new(
        "America/Los_Angeles".into(),
        CurrentConditions {
            timestamp: now.into(),
            temperature_c,
            precipitation: 0.0,
            is_daytime: true,
        },
        hourly,
    )
    .unwrap()
}

pub fn san_diego_snapshot() -> WeatherSnapshot {
    snapshot_at("2024-05-16T14:00", 21.4, two_day_hourly())
}

/// Every collaborator of [`Aya`], kept around so tests can inspect them.
pub struct Harness {
    pub store: Arc<InMemoryConfigStore>,
    pub geo: Arc<StaticGeoProvider>,
    pub weather: Arc<StaticWeatherProvider>,
    pub ip: Arc<StaticIpLocator>,
}

impl Harness {
    pub fn new(
        store: InMemoryConfigStore,
        geo: StaticGeoProvider,
        weather: StaticWeatherProvider,
        ip: StaticIpLocator,
    ) -> Self {
        Self {
            store: Arc::new(store),
            geo: Arc::new(geo),
            weather: Arc::new(weather),
            ip: Arc::new(ip),
        }
    }

    /// San Diego everywhere, nothing cached, IP lookups offline.
    pub fn san_diego() -> Self {
        Self::new(
            InMemoryConfigStore::new(),
            StaticGeoProvider::new(vec![san_diego()]),
            StaticWeatherProvider::new(san_diego_snapshot()),
            StaticIpLocator::offline(),
        )
    }

    pub fn aya(&self) -> Aya {
        Aya::with_providers(
            self.store.clone(),
            self.geo.clone(),
            self.weather.clone(),
            self.ip.clone(),
            Arc::new(AsciiPlotter::default()),
        )
    }

    pub fn store(&self) -> Arc<dyn ConfigStore> {
        self.store.clone()
    }
}
