use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ScreenerError;

/// One raw daily quote as returned by the exchange open API.
///
/// TWSE returns most numeric fields as strings (thousand separators,
/// `--` placeholders), so the raw values are kept as strings here and
/// parsed at the sync boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyQuote {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "TradeVolume")]
    pub trade_volume: String,
    #[serde(rename = "TradeValue")]
    pub trade_value: String,
    #[serde(rename = "OpeningPrice")]
    pub opening_price: String,
    #[serde(rename = "HighestPrice")]
    pub highest_price: String,
    #[serde(rename = "LowestPrice")]
    pub lowest_price: String,
    #[serde(rename = "ClosingPrice")]
    pub closing_price: String,
    #[serde(rename = "Change", default)]
    pub change: String,
    #[serde(rename = "Date", default)]
    pub date: String,
}

/// The `MarketDataClient` trait defines the interface for fetching daily
/// market quotes. It is implemented by the TWSE connector and a mock
/// implementation for development and tests.
#[async_trait]
pub trait MarketDataClient: Send + Sync {
    /// Fetch raw quotes for every stock traded on `date`.
    /// An empty result means no data for that day (holiday), not an error.
    async fn all_stocks_daily_data(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<DailyQuote>, ScreenerError>;
}
