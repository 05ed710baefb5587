/**
* filename : twse
* author : HAMA
* date: 2025. 5. 13.
* description: 대만 증권거래소(TWSE) 오픈 API 클라이언트
**/

use std::time::Duration;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use reqwest::Client;

use crate::error::ScreenerError;
use crate::market::traits::{DailyQuote, MarketDataClient};

/// 가격 문자열 파싱
///
/// TWSE는 천 단위 구분 쉼표를 포함한 문자열을 반환하고,
/// 거래 없는 항목은 '--' 또는 'N/A'로 표시한다. 이 경우 0.0.
pub fn parse_price(raw: &str) -> f64 {
    if raw.is_empty() || raw == "--" || raw == "N/A" {
        return 0.0;
    }
    raw.replace(',', "").parse().unwrap_or(0.0)
}

/// 거래량/거래대금 문자열 파싱 (쉼표 제거 후 정수 변환, 실패 시 0)
pub fn parse_volume(raw: &str) -> u64 {
    if raw.is_empty() || raw == "--" || raw == "N/A" {
        return 0;
    }
    raw.replace(',', "").parse().unwrap_or(0)
}

/// TWSE 오픈 API 클라이언트
///
/// STOCK_DAY_ALL 엔드포인트는 민국(ROC) 연도 기반 월 단위 키로 조회하므로,
/// 해당 월 1일 키로 요청한 뒤 응답에서 대상 일자만 걸러낸다.
pub struct TwseClient {
    client: Client,
    base_url: String,
}

impl TwseClient {
    pub fn new(base_url: impl Into<String>, timeout_ms: Option<u64>) -> Result<Self, ScreenerError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms.unwrap_or(30000)))
            .user_agent("Mozilla/5.0")
            .build()
            .map_err(|e| ScreenerError::MarketApiError(format!("Failed to build client: {}", e)))?;

        Ok(TwseClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// 서기 연도를 민국 연도로 바꾼 월 키 (일은 01로 고정)
    /// 예: 2024-02-15 -> "1130201"
    fn roc_month_key(date: NaiveDate) -> String {
        format!("{}{:02}01", date.year() - 1911, date.month())
    }

    /// 대상 일자의 민국 표기
    /// 예: 2024-02-15 -> "1130215"
    fn roc_day_key(date: NaiveDate) -> String {
        format!("{}{:02}{:02}", date.year() - 1911, date.month(), date.day())
    }
}

#[async_trait]
impl MarketDataClient for TwseClient {
    async fn all_stocks_daily_data(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<DailyQuote>, ScreenerError> {
        let month_key = Self::roc_month_key(date);
        let day_key = Self::roc_day_key(date);

        log::info!("[TWSE] {} 조회 (월 키: {})", date, month_key);

        let url = format!("{}/exchangeReport/STOCK_DAY_ALL", self.base_url);
        let response = self.client
            .get(&url)
            .query(&[("date", month_key.as_str()), ("response", "json")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScreenerError::MarketApiError(format!(
                "STOCK_DAY_ALL returned status {}",
                response.status()
            )));
        }

        let quotes: Vec<DailyQuote> = response.json().await?;

        // 월 전체 응답에서 대상 일자 레코드만 필터링
        let filtered: Vec<DailyQuote> = quotes
            .into_iter()
            .filter(|q| q.date == day_key)
            .collect();

        log::info!("[TWSE] {} 건 수신 ({})", filtered.len(), date);

        Ok(filtered)
    }
}
