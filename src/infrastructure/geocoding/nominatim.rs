use crate::domain::entities::coordinates::Coordinates;
use crate::domain::error::DomainError;
use crate::domain::ports::geo_provider::GeoProvider;
use async_trait::async_trait;
use serde::Deserialize;

/// OpenStreetMap Nominatim search. Free, no key, requires a user agent.
pub struct NominatimProvider {
    base_url: String,
    client: reqwest::Client,
}

impl NominatimProvider {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
}

impl Place {
    fn into_coordinates(self, query: &str) -> Coordinates {
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .or(self.display_name)
            .unwrap_or_else(|| query.to_string());
        Coordinates {
            latitude: self.lat,
            longitude: self.lon,
            name,
        }
    }
}

fn parse_places(body: &str, query: &str) -> Result<Vec<Coordinates>, DomainError> {
    let places: Vec<Place> = serde_json::from_str(body)
        .map_err(|e| DomainError::GeoLookup(format!("unexpected geocoder response: {e}")))?;
    Ok(places
        .into_iter()
        .map(|p| p.into_coordinates(query))
        .collect())
}

#[async_trait]
impl GeoProvider for NominatimProvider {
    async fn search(&self, city: &str) -> Result<Vec<Coordinates>, DomainError> {
        let url = format!("{}/search", self.base_url);
        tracing::debug!(%city, %url, "geocoding");

        let resp = self
            .client
            .get(&url)
            .query(&[("city", city), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| DomainError::GeoLookup(format!("geocoder unreachable: {e}")))?;

        if !resp.status().is_success() {
            return Err(DomainError::GeoLookup(format!(
                "geocoder returned {}",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| DomainError::GeoLookup(format!("reading geocoder response: {e}")))?;
        parse_places(&body, city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_coordinate_strings_verbatim() {
        let body = r#"[{"place_id":1,"lat":"32.7174202","lon":"-117.1627728","name":"San Diego","display_name":"San Diego, San Diego County, California, United States"}]"#;
        let places = parse_places(body, "San Diego").unwrap();
        assert_eq!(
            places,
            vec![Coordinates::new("32.7174202", "-117.1627728", "San Diego")]
        );
    }

    #[test]
    fn test_parse_falls_back_to_display_name() {
        let body = r#"[{"lat":"1.0","lon":"2.0","name":"","display_name":"Somewhere, Earth"}]"#;
        let places = parse_places(body, "Somewhere").unwrap();
        assert_eq!(places[0].name, "Somewhere, Earth");
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_places("[]", "Atlantis").unwrap().is_empty());
    }

    #[test]
    fn test_parse_error_is_geo_lookup() {
        assert!(matches!(
            parse_places(r#"{"error":"bad"}"#, "x"),
            Err(DomainError::GeoLookup(_))
        ));
    }
}
