use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::ScreenerError;
use crate::models::price::StockPrice;
use crate::models::signal::CrossoverSignal;
use crate::models::stock::Stock;

pub mod memory;

pub use memory::MemoryStorage;

/// The `Storage` trait defines the persistence interface for stocks, daily
/// prices and detected crossover signals. It is implemented by the in-memory
/// store and can be backed by a real database later.
///
/// Query results carry NO ordering guarantee; callers that need an order
/// must sort explicitly.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Find a stock by its code
    async fn get_stock(&self, code: &str) -> Result<Option<Stock>, ScreenerError>;

    /// Get the full stock registry
    async fn get_all_stocks(&self) -> Result<Vec<Stock>, ScreenerError>;

    /// Register a new stock
    async fn create_stock(&mut self, stock: &Stock) -> Result<(), ScreenerError>;

    /// Get up to `limit` most recent price records for a stock
    async fn get_stock_prices(
        &self,
        stock_code: &str,
        limit: Option<usize>,
    ) -> Result<Vec<StockPrice>, ScreenerError>;

    /// Get all price records for one date across all stocks
    async fn get_stock_prices_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<StockPrice>, ScreenerError>;

    /// Insert or update the price record keyed by (stock_code, date)
    async fn upsert_stock_price(&mut self, price: &StockPrice) -> Result<(), ScreenerError>;

    /// Insert or overwrite a signal keyed by (stock_code, cross_date, signal_type)
    async fn upsert_crossover_signal(
        &mut self,
        signal: &CrossoverSignal,
    ) -> Result<(), ScreenerError>;

    /// Delete all signals recorded for a date
    async fn delete_signals_by_date(&mut self, date: NaiveDate) -> Result<(), ScreenerError>;

    /// Get all signals recorded for a date
    async fn get_signals_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<CrossoverSignal>, ScreenerError>;

    /// Most recent date with any price data (None when the store is empty)
    async fn latest_price_date(&self) -> Result<Option<NaiveDate>, ScreenerError>;
}
