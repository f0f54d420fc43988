// src/services/pricing.rs
//! Client for the YGOPrices "price for print tag" lookup.
//! https://yugiohprices.docs.apiary.io/#reference/checking-card-prices/check-price-for-cards-print-tag

use reqwest::{Client, Url};
use serde::{Deserialize, Deserializer};

use crate::error::PriceError;

const SUCCESS_STATUS: &str = "success";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub high: f64,
    pub average: f64,
    pub low: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PriceLookup {
    Found(PriceQuote),
    NotFound,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PrintTagResponse {
    pub status: String,
    pub data: CardData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CardData {
    pub name: String,
    pub card_type: String,
    pub property: Option<serde_json::Value>,
    pub family: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price_data: PrintingData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PrintingData {
    pub name: String,
    pub print_tag: String,
    pub rarity: String,
    pub price_data: PriceHistory,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PriceHistory {
    pub status: String,
    pub data: PriceHistoryData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PriceHistoryData {
    pub listings: Vec<serde_json::Value>,
    pub prices: Prices,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Prices {
    #[serde(deserialize_with = "null_as_zero")]
    pub high: f64,
    #[serde(deserialize_with = "null_as_zero")]
    pub low: f64,
    #[serde(deserialize_with = "null_as_zero")]
    pub average: f64,
    pub shift: Option<f64>,
    pub shift_3: Option<f64>,
    pub shift_7: Option<f64>,
    pub shift_21: Option<f64>,
    pub shift_30: Option<f64>,
    pub shift_90: Option<f64>,
    pub shift_180: Option<f64>,
    pub shift_365: Option<f64>,
    pub updated_at: Option<String>,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

impl PrintTagResponse {
    /// Only a "success" status carries a usable price; anything else is a miss.
    pub fn into_lookup(self) -> PriceLookup {
        if self.status != SUCCESS_STATUS {
            return PriceLookup::NotFound;
        }
        let prices = self.data.price_data.price_data.data.prices;
        PriceLookup::Found(PriceQuote {
            high: prices.high,
            average: prices.average,
            low: prices.low,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PricingClient {
    http: Client,
    base_url: Url,
}

impl PricingClient {
    /// `base_url` must be able to take a path (`Config` only hands out such urls);
    /// otherwise every lookup fails with `PriceError::InvalidEndpoint`.
    pub fn new(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    fn lookup_url(&self, print_tag: &str) -> Result<Url, PriceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PriceError::InvalidEndpoint(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "price_for_print_tag", print_tag]);
        Ok(url)
    }

    /// Look up the current price of one card printing. `print_tag` must be non-empty.
    pub async fn fetch_price(&self, print_tag: &str) -> Result<PriceLookup, PriceError> {
        let url = self.lookup_url(print_tag)?;

        // The upstream status code is not meaningful; the body's status field is.
        let body = self
            .http
            .get(url)
            .send()
            .await
            .inspect_err(|e| tracing::error!(print_tag, error = %e, "price for print tag request error"))?
            .bytes()
            .await?;

        let response: PrintTagResponse = serde_json::from_slice(&body)
            .inspect_err(|e| tracing::error!(print_tag, error = %e, "parse price for print tag response"))?;

        let lookup = response.into_lookup();
        if lookup == PriceLookup::NotFound {
            tracing::info!(print_tag, "no price for print tag");
        }
        Ok(lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_url_encodes_tag_as_one_segment() {
        let client = PricingClient::new(Client::new(), Url::parse("http://prices.test/base/").unwrap());
        let url = client.lookup_url("LOB-EN001").unwrap();
        assert_eq!(url.as_str(), "http://prices.test/base/api/price_for_print_tag/LOB-EN001");

        let url = client.lookup_url("a/b?c").unwrap();
        assert_eq!(url.as_str(), "http://prices.test/base/api/price_for_print_tag/a%2Fb%3Fc");
    }

    #[tokio::test]
    async fn pathless_base_url_is_invalid_endpoint() {
        let client = PricingClient::new(Client::new(), Url::parse("mailto:prices@example.com").unwrap());
        let err = client.fetch_price("LOB-001").await.unwrap_err();
        assert!(matches!(err, PriceError::InvalidEndpoint(_)), "got {err:?}");
    }

    #[test]
    fn fail_status_without_data_is_not_found() {
        let response: PrintTagResponse =
            serde_json::from_str(r#"{"status":"fail","message":"No cards matching this print tag"}"#).unwrap();
        assert_eq!(response.into_lookup(), PriceLookup::NotFound);
    }

    #[test]
    fn null_prices_read_as_zero() {
        let response: PrintTagResponse = serde_json::from_str(
            r#"{"status":"success","data":{"price_data":{"price_data":{"data":{"prices":{"high":null,"average":1.5,"low":null}}}}}}"#,
        )
        .unwrap();
        assert_eq!(
            response.into_lookup(),
            PriceLookup::Found(PriceQuote { high: 0.0, average: 1.5, low: 0.0 })
        );
    }
}
