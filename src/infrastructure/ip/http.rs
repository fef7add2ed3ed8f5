use crate::domain::error::DomainError;
use crate::domain::ports::ip_locator::IpLocator;
use async_trait::async_trait;
use serde::Deserialize;

/// Public IP from httpbin, city from ipinfo.
pub struct HttpIpLocator {
    ip_url: String,
    ipinfo_url: String,
    client: reqwest::Client,
}

impl HttpIpLocator {
    pub fn new(
        client: reqwest::Client,
        ip_url: impl Into<String>,
        ipinfo_url: impl Into<String>,
    ) -> Self {
        Self {
            ip_url: ip_url.into(),
            ipinfo_url: ipinfo_url.into(),
            client,
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, DomainError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::IpLookup(format!("{url} unreachable: {e}")))?;

        if !resp.status().is_success() {
            return Err(DomainError::IpLookup(format!(
                "{url} returned {}",
                resp.status()
            )));
        }

        resp.json::<T>()
            .await
            .map_err(|e| DomainError::IpLookup(format!("unexpected response from {url}: {e}")))
    }
}

#[derive(Debug, Deserialize)]
struct OriginResponse {
    origin: String,
}

#[derive(Debug, Deserialize)]
struct IpInfoResponse {
    #[serde(default)]
    city: Option<String>,
}

/// httpbin reports `client, proxy1, proxy2` when the request was forwarded.
fn first_origin(origin: &str) -> Option<String> {
    origin
        .split(',')
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl IpLocator for HttpIpLocator {
    async fn public_ip(&self) -> Result<String, DomainError> {
        let url = format!("{}/ip", self.ip_url);
        let body: OriginResponse = self.get_json(&url).await?;
        first_origin(&body.origin)
            .ok_or_else(|| DomainError::IpLookup("empty origin in IP response".into()))
    }

    async fn city_for_ip(&self, ip: &str) -> Result<String, DomainError> {
        let url = format!("{}/{ip}/json", self.ipinfo_url);
        let body: IpInfoResponse = self.get_json(&url).await?;
        body.city
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| DomainError::IpLookup(format!("no city known for {ip}")))
    }
}
