/**
* filename : detector
* author : HAMA
* date: 2025. 5. 14.
* description: 이동평균 크로스오버 탐지 엔진
**/

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::error::ScreenerError;
use crate::indicators::moving_average::{
  detect_crossover, simple_moving_average, MovingAverageResult,
};
use crate::models::signal::CrossoverSignal;
use crate::storage::Storage;

/// 단기 이동평균 기간
pub const SHORT_WINDOW: usize = 10;
/// 장기 이동평균 기간
pub const LONG_WINDOW: usize = 50;
/// 주가 조회 버퍼 (장기 이동평균 50일 + 전일 비교 여유분)
pub const LOOKBACK_WINDOW: usize = 60;
/// 거래대금 순위 부여 상한
pub const VOLUME_RANK_LIMIT: usize = 200;
/// 순위 없는 신호의 정렬 키 (항상 순위권 뒤로 밀림)
pub const UNRANKED_SORT_KEY: u32 = 999;

/// 이동평균 크로스오버 탐지 엔진
///
/// 저장소는 생성자로 주입받는다. 엔진은 저장소를 읽기만 하고,
/// 결과 저장은 호출자 몫이다.
pub struct CrossoverDetector {
  storage: Arc<RwLock<dyn Storage>>,
}

impl CrossoverDetector {
  pub fn new(storage: Arc<RwLock<dyn Storage>>) -> Self {
    CrossoverDetector { storage }
  }

  /// 특정 종목의 특정 일자 이동평균 계산
  ///
  /// 저장소 장애만 Err로 전파한다. 데이터 부족이나 해당 일자 주가
  /// 없음은 Ok(None) — 흔히 있는 정상 상태다.
  pub async fn compute_moving_averages(
    &self,
    stock_code: &str,
    date: NaiveDate,
  ) -> Result<Option<MovingAverageResult>, ScreenerError> {
    let mut prices = {
      let storage = self.storage.read().await;
      storage.get_stock_prices(stock_code, Some(LOOKBACK_WINDOW)).await?
    };

    if prices.len() < LONG_WINDOW {
      return Ok(None); // 장기 이동평균 계산에 필요한 이력 부족
    }

    // 저장소는 순서를 보장하지 않으므로 날짜 내림차순 정렬은 필수
    prices.sort_by(|a, b| b.date.cmp(&a.date));

    let today_index = match prices.iter().position(|p| p.date == date) {
      Some(index) => index,
      None => return Ok(None), // 해당 일자 주가 없음 (휴장 또는 미수집)
    };

    // 대상 일자부터 과거 방향의 종가 (index 0 = 대상 일자 종가)
    let closes: Vec<f64> = prices[today_index..].iter().map(|p| p.close_price).collect();

    let (short_ma, long_ma) = match (
      simple_moving_average(&closes, SHORT_WINDOW),
      simple_moving_average(&closes, LONG_WINDOW),
    ) {
      (Some(short), Some(long)) => (short, long),
      _ => return Ok(None),
    };

    // 전일 기준 이동평균 (크로스 판별용)
    // 대상 일자가 조회 범위의 가장 오래된 날이면 둘 다 None으로 남는다.
    let mut previous_short_ma = None;
    let mut previous_long_ma = None;

    if today_index < prices.len() - 1 {
      let previous_closes: Vec<f64> =
        prices[today_index + 1..].iter().map(|p| p.close_price).collect();
      previous_short_ma = simple_moving_average(&previous_closes, SHORT_WINDOW);
      previous_long_ma = simple_moving_average(&previous_closes, LONG_WINDOW);
    }

    Ok(Some(MovingAverageResult {
      stock_code: stock_code.to_string(),
      date,
      short_ma,
      long_ma,
      current_price: closes[0],
      previous_short_ma,
      previous_long_ma,
    }))
  }

  /// 특정 일자의 전 종목 크로스오버 탐지
  ///
  /// 거래대금 상위 200 종목에만 순위를 부여하고, 결과는 순위
  /// 오름차순(순위 없는 신호는 뒤)으로 정렬해 반환한다.
  pub async fn detect_crossovers_for_date(
    &self,
    date: NaiveDate,
  ) -> Result<Vec<CrossoverSignal>, ScreenerError> {
    let (stocks, prices_by_date) = {
      let storage = self.storage.read().await;
      let stocks = storage.get_all_stocks().await?;
      let prices = storage.get_stock_prices_by_date(date).await?;
      (stocks, prices)
    };

    // 당일 거래대금 내림차순 상위 200 — 순위 산정 도메인
    let mut amount_ranking = prices_by_date;
    amount_ranking.sort_by(|a, b| b.volume_value.cmp(&a.volume_value));
    amount_ranking.truncate(VOLUME_RANK_LIMIT);

    let mut signals = Vec::new();

    for stock in &stocks {
      let ma_result = match self.compute_moving_averages(&stock.code, date).await? {
        Some(result) => result,
        None => continue, // 이력 부족 종목은 건너뜀
      };

      let signal_type = match detect_crossover(&ma_result) {
        Some(signal_type) => signal_type,
        None => continue,
      };

      // 거래대금 순위 (1부터 시작, 상위 200 밖이면 None)
      let volume_rank = amount_ranking
        .iter()
        .position(|p| p.stock_code == stock.code)
        .map(|index| (index + 1) as u32);

      log::debug!("{} {} 크로스 발견 ({})", stock.code, signal_type, date);

      signals.push(CrossoverSignal {
        stock_code: stock.code.clone(),
        stock_name: stock.name.clone(),
        signal_type,
        cross_date: date,
        price: ma_result.current_price,
        short_ma: ma_result.short_ma,
        long_ma: ma_result.long_ma,
        volume_rank,
      });
    }

    // 순위 오름차순 정렬, 순위 없는 신호는 뒤로 (안정 정렬이라
    // 순위 없는 신호끼리는 발견 순서 유지)
    signals.sort_by_key(|s| s.volume_rank.unwrap_or(UNRANKED_SORT_KEY));

    log::debug!("크로스오버 탐지 완료: {} - {} 건", date, signals.len());

    Ok(signals)
  }
}
