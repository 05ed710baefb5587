//! 이동평균 계산 관련 테스트
//!
//! 단순 이동평균과 크로스오버 판별 로직 테스트

use chrono::NaiveDate;
use rstest::rstest;
use xScreener::indicators::moving_average::{
  detect_crossover, simple_moving_average, MovingAverageResult,
};
use xScreener::models::signal::SignalType;

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
fn test_sma_of_identical_values() {
  // 동일한 값 10개의 평균은 그 값 자신
  let closes = vec![10.0; 10];
  assert_eq!(simple_moving_average(&closes, 10), Some(10.0));
}

#[test]
fn test_sma_takes_most_recent_window() {
  // index 0이 최신이므로 앞쪽 period개만 평균에 들어간다
  let closes = vec![2.0, 4.0, 100.0, 100.0];
  assert_eq!(simple_moving_average(&closes, 2), Some(3.0));
}

#[test]
fn test_sma_insufficient_history_is_none() {
  let closes = vec![10.0; 49];
  assert_eq!(simple_moving_average(&closes, 50), None);
  assert_eq!(simple_moving_average(&[], 10), None);
}

#[rstest]
#[case(9.0, 10.0, 11.0, 10.0, Some(SignalType::Golden))]
#[case(11.0, 10.0, 9.0, 10.0, Some(SignalType::Death))]
#[case(10.0, 10.0, 11.0, 10.0, None)] // 전일 차이가 정확히 0 - 접촉이지 돌파 아님
#[case(9.0, 10.0, 10.0, 10.0, None)] // 당일 차이가 정확히 0
#[case(9.5, 10.0, 9.0, 10.0, None)] // 계속 아래에 머무름
#[case(11.0, 10.0, 11.5, 10.0, None)] // 계속 위에 머무름
fn test_crossover_classification(
  #[case] previous_short: f64,
  #[case] previous_long: f64,
  #[case] short: f64,
  #[case] long: f64,
  #[case] expected: Option<SignalType>,
) {
  let result = make_result(short, long, Some(previous_short), Some(previous_long));
  assert_eq!(detect_crossover(&result), expected);
}

#[test]
fn test_crossover_needs_previous_values() {
  // 전일 이동평균이 없으면 어떤 값이든 신호 없음
  let result = make_result(11.0, 10.0, None, None);
  assert_eq!(detect_crossover(&result), None);

  let result = make_result(11.0, 10.0, Some(9.0), None);
  assert_eq!(detect_crossover(&result), None);

  let result = make_result(11.0, 10.0, None, Some(10.0));
  assert_eq!(detect_crossover(&result), None);
}
