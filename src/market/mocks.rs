use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ScreenerError;
use crate::market::traits::{DailyQuote, MarketDataClient};

/// A mock implementation of the MarketDataClient trait for development
/// and testing without touching the real TWSE API.
pub struct MockMarketClient {
    universe: Vec<(String, String)>,
}

impl MockMarketClient {
    pub fn new() -> Self {
        let mut universe: Vec<(String, String)> = vec![
            ("2330".to_string(), "台積電".to_string()),
            ("2317".to_string(), "鴻海".to_string()),
            ("2454".to_string(), "聯發科".to_string()),
            ("2303".to_string(), "聯電".to_string()),
            ("2881".to_string(), "富邦金".to_string()),
            ("2882".to_string(), "國泰金".to_string()),
            ("1301".to_string(), "台塑".to_string()),
            ("1303".to_string(), "南亞".to_string()),
            ("2002".to_string(), "中鋼".to_string()),
            ("2412".to_string(), "中華電".to_string()),
        ];

        // Fill the rest of the universe with numbered placeholder stocks
        for i in 0..140 {
            let code = format!("{}", 3001 + i);
            universe.push((code.clone(), format!("Stock {}", code)));
        }

        MockMarketClient { universe }
    }

    fn base_price(code: &str) -> f64 {
        let numeric: u64 = code.parse().unwrap_or(1000);
        50.0 + (numeric % 450) as f64
    }
}

impl Default for MockMarketClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataClient for MockMarketClient {
    async fn all_stocks_daily_data(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<DailyQuote>, ScreenerError> {
        // Market closed on weekends
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return Ok(Vec::new());
        }

        // Seed from the date so repeated requests for the same day
        // return identical data
        let mut rng = StdRng::seed_from_u64(date.num_days_from_ce() as u64);

        let mut quotes = Vec::with_capacity(self.universe.len());
        for (code, name) in &self.universe {
            let base = Self::base_price(code);
            let drift: f64 = rng.gen_range(-0.05..0.05);
            let close = base * (1.0 + drift);
            let open = close * (1.0 - 0.005);
            let high = close * (1.0 + 0.01);
            let low = close * (1.0 - 0.01);
            let volume: u64 = rng.gen_range(100_000..50_000_000);
            let trade_value = (close * volume as f64) as u64;

            quotes.push(DailyQuote {
                code: code.clone(),
                name: name.clone(),
                trade_volume: volume.to_string(),
                trade_value: trade_value.to_string(),
                opening_price: format!("{:.2}", open),
                highest_price: format!("{:.2}", high),
                lowest_price: format!("{:.2}", low),
                closing_price: format!("{:.2}", close),
                change: String::new(),
                date: String::new(),
            });
        }

        Ok(quotes)
    }
}
