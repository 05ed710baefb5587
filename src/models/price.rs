use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 한 종목의 하루치 주가 기록
///
/// (stock_code, date) 조합으로 유일하며, 저장소가 유일성을 보장한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockPrice {
    pub stock_code: String,
    pub date: NaiveDate,
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
    /// 성사 주식 수
    pub volume: u64,
    /// 명목 거래대금 (가격 x 수량) — 순위 산정에만 사용
    pub volume_value: u64,
}

impl StockPrice {
    pub fn new(
        stock_code: impl Into<String>,
        date: NaiveDate,
        open_price: f64,
        high_price: f64,
        low_price: f64,
        close_price: f64,
        volume: u64,
        volume_value: u64,
    ) -> Self {
        StockPrice {
            stock_code: stock_code.into(),
            date,
            open_price,
            high_price,
            low_price,
            close_price,
            volume,
            volume_value,
        }
    }
}
