/**
* filename : moving_average
* author : HAMA
* date: 2025. 5. 13.
* description: 단순 이동평균 계산과 크로스오버 판별
**/

use chrono::NaiveDate;

use crate::models::signal::SignalType;

/// 한 종목의 특정 일자 이동평균 계산 결과
///
/// 파생 데이터로, 저장하지 않고 요청 시마다 다시 계산한다.
#[derive(Debug, Clone)]
pub struct MovingAverageResult {
  pub stock_code: String,
  pub date: NaiveDate,
  /// 단기(10일) 이동평균
  pub short_ma: f64,
  /// 장기(50일) 이동평균
  pub long_ma: f64,
  /// 해당 일자 종가
  pub current_price: f64,
  /// 전일 기준 단기 이동평균 (이력이 부족하면 None)
  pub previous_short_ma: Option<f64>,
  /// 전일 기준 장기 이동평균 (이력이 부족하면 None)
  pub previous_long_ma: Option<f64>,
}

/// 단순 이동평균 계산
///
/// closes는 최신 종가가 index 0에 오는 순서. 앞에서부터 period개의
/// 산술 평균을 반환하고, 데이터가 부족하면 None (오류가 아니라
/// "아직 계산 불가" 상태).
pub fn simple_moving_average(closes: &[f64], period: usize) -> Option<f64> {
  if period == 0 || closes.len() < period {
    return None;
  }

  let sum: f64 = closes[..period].iter().sum();
  Some(sum / period as f64)
}

/// 골든 크로스 / 데드 크로스 판별
///
/// 전일 이동평균이 둘 다 있어야 판별 가능. 없으면 None (오류 아님).
pub fn detect_crossover(result: &MovingAverageResult) -> Option<SignalType> {
  let (prev_short, prev_long) = match (result.previous_short_ma, result.previous_long_ma) {
    (Some(s), Some(l)) => (s, l),
    _ => return None,
  };

  let current_diff = result.short_ma - result.long_ma;
  let previous_diff = prev_short - prev_long;

  // 골든 크로스: 어제는 단기선이 장기선 아래, 오늘은 위
  if previous_diff < 0.0 && current_diff > 0.0 {
    return Some(SignalType::Golden);
  }

  // 데드 크로스: 어제는 단기선이 장기선 위, 오늘은 아래
  if previous_diff > 0.0 && current_diff < 0.0 {
    return Some(SignalType::Death);
  }

  // 차이가 정확히 0인 경우는 접촉이지 돌파가 아니므로 신호 없음
  None
}

#[cfg(test)]
mod tests {
  use super::*;

  fn make_result(
    short_ma: f64,
    long_ma: f64,
    previous_short_ma: Option<f64>,
    previous_long_ma: Option<f64>,
  ) -> MovingAverageResult {
    MovingAverageResult {
      stock_code: "2330".to_string(),
      date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
      short_ma,
      long_ma,
      current_price: 100.0,
      previous_short_ma,
      previous_long_ma,
    }
  }

  #[test]
  fn test_sma_identical_values() {
    let closes = vec![10.0; 10];
    assert_eq!(simple_moving_average(&closes, 10), Some(10.0));
  }

  #[test]
  fn test_sma_uses_most_recent_values() {
    // index 0이 최신 값이므로 앞쪽 period개만 평균
    let closes = vec![1.0, 2.0, 3.0, 4.0];
    assert_eq!(simple_moving_average(&closes, 2), Some(1.5));
  }

  #[test]
  fn test_sma_insufficient_data() {
    let closes = vec![10.0; 9];
    assert_eq!(simple_moving_average(&closes, 10), None);
    assert_eq!(simple_moving_average(&[], 1), None);
  }

  #[test]
  fn test_crossover_requires_previous_values() {
    let result = make_result(11.0, 10.0, None, None);
    assert_eq!(detect_crossover(&result), None);

    let result = make_result(11.0, 10.0, Some(9.0), None);
    assert_eq!(detect_crossover(&result), None);
  }

  #[test]
  fn test_golden_cross() {
    let result = make_result(11.0, 10.0, Some(9.0), Some(10.0));
    assert_eq!(detect_crossover(&result), Some(SignalType::Golden));
  }

  #[test]
  fn test_death_cross() {
    let result = make_result(9.0, 10.0, Some(11.0), Some(10.0));
    assert_eq!(detect_crossover(&result), Some(SignalType::Death));
  }

  #[test]
  fn test_touching_is_not_crossing() {
    // 전일 차이가 정확히 0이면 현재 값과 무관하게 신호 없음
    let result = make_result(11.0, 10.0, Some(10.0), Some(10.0));
    assert_eq!(detect_crossover(&result), None);

    // 당일 차이가 정확히 0인 경우도 마찬가지
    let result = make_result(10.0, 10.0, Some(9.0), Some(10.0));
    assert_eq!(detect_crossover(&result), None);
  }
}
