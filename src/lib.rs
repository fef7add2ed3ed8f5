pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::clear_config::ClearConfigUseCase;
use crate::application::default_city::DefaultCityUseCase;
use crate::application::fetch_weather::FetchWeatherUseCase;
use crate::application::graph::TimeSeriesGraph;
use crate::application::report::{ReportUseCase, WeatherReport};
use crate::application::resolve_city::ResolveCityUseCase;
use crate::domain::entities::cache::Cache;
use crate::domain::error::DomainError;
use crate::domain::ports::config_store::ConfigStore;
use crate::domain::ports::geo_provider::GeoProvider;
use crate::domain::ports::ip_locator::IpLocator;
use crate::domain::ports::plotter::Plotter;
use crate::domain::ports::weather_provider::WeatherProvider;
use crate::infrastructure::config::json_store::JsonFileStore;
use crate::infrastructure::forecast::open_meteo::OpenMeteoProvider;
use crate::infrastructure::geocoding::nominatim::NominatimProvider;
use crate::infrastructure::ip::http::HttpIpLocator;
use crate::infrastructure::plot::ascii::AsciiPlotter;
use crate::infrastructure::settings::{http_client, Settings};
use std::sync::Arc;

pub struct Aya {
    store: Arc<dyn ConfigStore>,
    report_uc: ReportUseCase,
    default_city_uc: DefaultCityUseCase,
    clear_config_uc: ClearConfigUseCase,
}

impl Aya {
    pub fn new() -> Result<Self, DomainError> {
        let settings = Settings::from_env()?;
        Self::from_settings(&settings)
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, DomainError> {
        tracing::debug!(config = %settings.config_path.display(), "using config file");
        let client = http_client()?;

        Ok(Self::with_providers(
            Arc::new(JsonFileStore::new(&settings.config_path)),
            Arc::new(NominatimProvider::new(client.clone(), &settings.geocode_url)),
            Arc::new(OpenMeteoProvider::new(client.clone(), &settings.forecast_url)),
            Arc::new(HttpIpLocator::new(
                client,
                &settings.ip_url,
                &settings.ipinfo_url,
            )),
            Arc::new(AsciiPlotter),
        ))
    }

    pub fn with_providers(
        store: Arc<dyn ConfigStore>,
        geo: Arc<dyn GeoProvider>,
        weather: Arc<dyn WeatherProvider>,
        ip: Arc<dyn IpLocator>,
        plotter: Arc<dyn Plotter>,
    ) -> Self {
        Self {
            report_uc: ReportUseCase::new(
                ResolveCityUseCase::new(geo, store.clone()),
                FetchWeatherUseCase::new(weather),
                TimeSeriesGraph::new(plotter),
            ),
            default_city_uc: DefaultCityUseCase::new(ip, store.clone()),
            clear_config_uc: ClearConfigUseCase::new(store.clone()),
            store,
        }
    }

    /// The persisted document, or an empty one when it cannot be read.
    pub fn load_cache(&self) -> Cache {
        match self.store.load() {
            Ok(cache) => cache,
            Err(e) => {
                tracing::warn!("{e}; starting with an empty cache");
                Cache::default()
            }
        }
    }

    /// Weather report for `city`, or for the IP-derived default city when
    /// `None`.
    pub async fn weather(
        &self,
        city: Option<&str>,
        graph: bool,
    ) -> Result<WeatherReport, DomainError> {
        let mut cache = self.load_cache();
        let city = match city {
            Some(c) => c.to_string(),
            None => self.default_city_uc.execute(&mut cache).await?,
        };
        self.report_uc.execute(&city, graph, &mut cache).await
    }

    pub fn clear_config(&self) -> Result<(), DomainError> {
        self.clear_config_uc.execute()
    }
}
