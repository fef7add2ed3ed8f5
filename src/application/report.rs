use crate::application::fetch_weather::FetchWeatherUseCase;
use crate::application::graph::TimeSeriesGraph;
use crate::application::resolve_city::ResolveCityUseCase;
use crate::domain::entities::cache::Cache;
use crate::domain::entities::coordinates::Coordinates;
use crate::domain::entities::weather::WeatherSnapshot;
use crate::domain::error::DomainError;
use crate::domain::values::timestamp::clock_label;
use chrono::NaiveDateTime;
use std::fmt;

/// Everything printed for one `weather` invocation.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub location: Coordinates,
    pub snapshot: WeatherSnapshot,
    pub updated_at: NaiveDateTime,
    pub graph: Option<String>,
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = self.snapshot.current();
        writeln!(f, "{}", self.location.name)?;
        writeln!(f, "{} TZ", self.snapshot.timezone())?;
        writeln!(f, "Last update: {}", clock_label(&self.updated_at))?;
        writeln!(
            f,
            "Current: {:.1}°C ({})",
            current.temperature_c,
            if current.is_daytime { "day" } else { "night" }
        )?;
        write!(f, "Precipitation: {:.1} mm", current.precipitation)?;
        if let Some(graph) = &self.graph {
            write!(f, "\n\n{graph}")?;
        }
        Ok(())
    }
}

/// City name in, report out: resolve, fetch, and optionally graph.
pub struct ReportUseCase {
    resolve_city: ResolveCityUseCase,
    fetch_weather: FetchWeatherUseCase,
    graph: TimeSeriesGraph,
}

impl ReportUseCase {
    pub fn new(
        resolve_city: ResolveCityUseCase,
        fetch_weather: FetchWeatherUseCase,
        graph: TimeSeriesGraph,
    ) -> Self {
        Self {
            resolve_city,
            fetch_weather,
            graph,
        }
    }

    pub async fn execute(
        &self,
        city: &str,
        with_graph: bool,
        cache: &mut Cache,
    ) -> Result<WeatherReport, DomainError> {
        let location = self.resolve_city.execute(city, cache).await?;
        let snapshot = self.fetch_weather.execute(&location).await?;
        let updated_at = snapshot.updated_at()?;

        let graph = if with_graph {
            Some(self.graph.render(&snapshot)?)
        } else {
            None
        };

        Ok(WeatherReport {
            location,
            snapshot,
            updated_at,
            graph,
        })
    }
}
