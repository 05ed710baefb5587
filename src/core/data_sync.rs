/**
* filename : data_sync
* author : HAMA
* date: 2025. 5. 14.
* description: 시장 데이터 동기화와 크로스오버 탐지 오케스트레이션
**/

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::core::detector::CrossoverDetector;
use crate::error::ScreenerError;
use crate::market::traits::{DailyQuote, MarketDataClient};
use crate::market::twse::{parse_price, parse_volume};
use crate::models::price::StockPrice;
use crate::models::stock::Stock;
use crate::storage::Storage;
use crate::utils::weekday_range;

/// 일별 동기화 시 반영하는 거래대금 상위 종목 수
pub const SYNC_TOP_COUNT: usize = 100;
/// 과거 데이터 수집 시 일자 간 지연 (밀리초)
const BACKFILL_DELAY_MS: u64 = 2000;

/// 데이터 동기화 서비스
///
/// 시장 API에서 하루치 시세를 받아 저장소에 반영하고,
/// 탐지 엔진을 돌려 크로스오버 신호를 저장한다.
pub struct DataSyncService {
  storage: Arc<RwLock<dyn Storage>>,
  market: Arc<dyn MarketDataClient>,
  detector: CrossoverDetector,
}

impl DataSyncService {
  pub fn new(storage: Arc<RwLock<dyn Storage>>, market: Arc<dyn MarketDataClient>) -> Self {
    let detector = CrossoverDetector::new(storage.clone());
    DataSyncService {
      storage,
      market,
      detector,
    }
  }

  /// 특정 일자 주가 데이터 동기화
  ///
  /// 거래대금 상위 100 종목만 반영한다. 반영한 종목 수를 반환.
  pub async fn sync_stock_data(&self, date: NaiveDate) -> Result<usize, ScreenerError> {
    log::info!("[DataSync] {} 동기화 시작", date);

    let quotes = self.market.all_stocks_daily_data(date).await?;

    if quotes.is_empty() {
      log::info!("[DataSync] {} 데이터 없음", date);
      return Ok(0);
    }

    log::info!("[DataSync] {} 종목 수신", quotes.len());

    // 거래대금 파싱 불가 항목 제외 후 내림차순 상위 100 종목
    let mut sorted: Vec<&DailyQuote> = quotes
      .iter()
      .filter(|q| !q.trade_value.is_empty() && q.trade_value != "--")
      .collect();
    sorted.sort_by(|a, b| parse_volume(&b.trade_value).cmp(&parse_volume(&a.trade_value)));
    sorted.truncate(SYNC_TOP_COUNT);

    log::info!("[DataSync] 거래대금 상위 {} 종목 반영", sorted.len());

    let mut storage = self.storage.write().await;
    for quote in &sorted {
      // 미등록 종목은 레지스트리에 먼저 추가
      if storage.get_stock(&quote.code).await?.is_none() {
        storage.create_stock(&Stock::new(&quote.code, &quote.name)).await?;
      }

      storage
        .upsert_stock_price(&StockPrice::new(
          &quote.code,
          date,
          parse_price(&quote.opening_price),
          parse_price(&quote.highest_price),
          parse_price(&quote.lowest_price),
          parse_price(&quote.closing_price),
          parse_volume(&quote.trade_volume),
          parse_volume(&quote.trade_value),
        ))
        .await?;
    }

    log::info!("[DataSync] {} 주가 동기화 완료", date);

    Ok(sorted.len())
  }

  /// 크로스오버 탐지 후 저장
  ///
  /// 같은 일자를 다시 돌려도 기존 신호를 지우고 다시 쓰므로
  /// 중복이 생기지 않는다. 저장한 신호 수를 반환.
  pub async fn detect_and_store_crossovers(&self, date: NaiveDate) -> Result<usize, ScreenerError> {
    log::info!("[DataSync] {} 크로스오버 탐지 시작", date);

    {
      let mut storage = self.storage.write().await;
      storage.delete_signals_by_date(date).await?;
    }

    let signals = self.detector.detect_crossovers_for_date(date).await?;

    log::info!("[DataSync] 크로스오버 {} 건 탐지", signals.len());

    let mut storage = self.storage.write().await;
    for signal in &signals {
      storage.upsert_crossover_signal(signal).await?;
    }

    log::info!("[DataSync] {} 크로스오버 저장 완료", date);

    Ok(signals.len())
  }

  /// 하루치 전체 동기화 (주가 반영 후 크로스오버 탐지)
  ///
  /// (반영한 종목 수, 저장한 신호 수)를 반환.
  pub async fn full_sync(&self, date: NaiveDate) -> Result<(usize, usize), ScreenerError> {
    log::info!("[DataSync] {} 전체 동기화 시작", date);

    let synced = self.sync_stock_data(date).await?;
    let signals = self.detect_and_store_crossovers(date).await?;

    log::info!("[DataSync] {} 전체 동기화 완료", date);

    Ok((synced, signals))
  }

  /// 과거 데이터 초기화
  ///
  /// 주말을 제외한 일자를 순차 처리한다. 특정 일자 실패는 기록만
  /// 남기고 계속 진행하며, 요청 간 지연으로 API 부하를 줄인다.
  pub async fn initialize_historical_data(
    &self,
    start: NaiveDate,
    end: NaiveDate,
  ) -> Result<(), ScreenerError> {
    let dates = weekday_range(start, end);

    log::info!("[DataSync] 과거 데이터 초기화: {} 일", dates.len());

    for date in dates {
      if let Err(e) = self.full_sync(date).await {
        log::error!("[DataSync] {} 동기화 실패: {}", date, e);
      }
      tokio::time::sleep(Duration::from_millis(BACKFILL_DELAY_MS)).await;
    }

    log::info!("[DataSync] 과거 데이터 초기화 완료");

    Ok(())
  }
}
