use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::ScreenerError;
use crate::models::price::StockPrice;
use crate::models::signal::{CrossoverSignal, SignalType};
use crate::models::stock::Stock;
use crate::storage::Storage;

/// 메모리 기반 저장소 구현
///
/// 키 구조가 유일성 불변식을 그대로 표현한다:
/// 주가는 (종목코드, 일자), 신호는 (종목코드, 일자, 신호유형).
pub struct MemoryStorage {
    stocks: HashMap<String, Stock>,
    prices: HashMap<(String, NaiveDate), StockPrice>,
    signals: HashMap<(String, NaiveDate, SignalType), CrossoverSignal>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage {
            stocks: HashMap::new(),
            prices: HashMap::new(),
            signals: HashMap::new(),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_stock(&self, code: &str) -> Result<Option<Stock>, ScreenerError> {
        Ok(self.stocks.get(code).cloned())
    }

    async fn get_all_stocks(&self) -> Result<Vec<Stock>, ScreenerError> {
        Ok(self.stocks.values().cloned().collect())
    }

    async fn create_stock(&mut self, stock: &Stock) -> Result<(), ScreenerError> {
        self.stocks.insert(stock.code.clone(), stock.clone());
        Ok(())
    }

    async fn get_stock_prices(
        &self,
        stock_code: &str,
        limit: Option<usize>,
    ) -> Result<Vec<StockPrice>, ScreenerError> {
        let mut prices: Vec<StockPrice> = self.prices.values()
            .filter(|p| p.stock_code == stock_code)
            .cloned()
            .collect();

        // limit은 "가장 최근 N건"을 의미하므로 여기서만 정렬해서 자른다.
        // 반환 순서 자체는 계약상 보장하지 않는다.
        if let Some(limit) = limit {
            prices.sort_by(|a, b| b.date.cmp(&a.date));
            prices.truncate(limit);
        }

        Ok(prices)
    }

    async fn get_stock_prices_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<StockPrice>, ScreenerError> {
        let prices: Vec<StockPrice> = self.prices.values()
            .filter(|p| p.date == date)
            .cloned()
            .collect();

        Ok(prices)
    }

    async fn upsert_stock_price(&mut self, price: &StockPrice) -> Result<(), ScreenerError> {
        let key = (price.stock_code.clone(), price.date);
        self.prices.insert(key, price.clone());
        Ok(())
    }

    async fn upsert_crossover_signal(
        &mut self,
        signal: &CrossoverSignal,
    ) -> Result<(), ScreenerError> {
        let key = (signal.stock_code.clone(), signal.cross_date, signal.signal_type);
        self.signals.insert(key, signal.clone());
        Ok(())
    }

    async fn delete_signals_by_date(&mut self, date: NaiveDate) -> Result<(), ScreenerError> {
        self.signals.retain(|(_, cross_date, _), _| *cross_date != date);
        Ok(())
    }

    async fn get_signals_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<CrossoverSignal>, ScreenerError> {
        let signals: Vec<CrossoverSignal> = self.signals.values()
            .filter(|s| s.cross_date == date)
            .cloned()
            .collect();

        Ok(signals)
    }

    async fn latest_price_date(&self) -> Result<Option<NaiveDate>, ScreenerError> {
        Ok(self.prices.values().map(|p| p.date).max())
    }
}
