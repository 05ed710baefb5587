//! 날짜 관련 유틸리티
//!
//! 거래일 계산, 타이베이 시간대 변환, 스케줄 계산 함수 제공

pub mod logging;

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveTime, Utc, Weekday};

/// 타이베이 표준시 오프셋 (UTC+8, 일광절약시간 없음)
const TAIPEI_OFFSET_SECS: i32 = 8 * 3600;

fn taipei_offset() -> FixedOffset {
  FixedOffset::east_opt(TAIPEI_OFFSET_SECS).unwrap()
}

/// 타이베이 기준 오늘 날짜
pub fn today_taipei() -> NaiveDate {
  Utc::now().with_timezone(&taipei_offset()).date_naive()
}

/// 평일(월-금) 여부
pub fn is_weekday(date: NaiveDate) -> bool {
  !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// 시작일부터 종료일까지(양끝 포함) 주말을 제외한 날짜 목록
pub fn weekday_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
  let mut dates = Vec::new();
  let mut current = start;

  while current <= end {
    if is_weekday(current) {
      dates.push(current);
    }
    match current.succ_opt() {
      Some(next) => current = next,
      None => break,
    }
  }

  dates
}

/// 다음 실행 시각(타이베이 기준 평일 hour:minute)까지의 대기 시간
pub fn next_fire_delay(hour: u32, minute: u32) -> std::time::Duration {
  let fallback = std::time::Duration::from_secs(60);

  let fire_time = match NaiveTime::from_hms_opt(hour, minute, 0) {
    Some(time) => time,
    None => return fallback, // 잘못된 설정 값이면 1분 후 재계산
  };

  let now = Utc::now().with_timezone(&taipei_offset());
  let mut candidate = now.date_naive();

  // 오늘 실행 시각이 이미 지났으면 다음 날부터
  if now.time() >= fire_time {
    candidate = match candidate.succ_opt() {
      Some(next) => next,
      None => return fallback,
    };
  }

  // 주말은 건너뜀
  while !is_weekday(candidate) {
    candidate = match candidate.succ_opt() {
      Some(next) => next,
      None => return fallback,
    };
  }

  let target = match candidate.and_time(fire_time).and_local_timezone(taipei_offset()).single() {
    Some(target) => target,
    None => return fallback,
  };

  target.signed_duration_since(now).to_std().unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_is_weekday() {
    // 2024-01-06은 토요일, 2024-01-08은 월요일
    assert!(!is_weekday(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()));
    assert!(!is_weekday(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()));
    assert!(is_weekday(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()));
  }

  #[test]
  fn test_weekday_range_skips_weekends() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(); // 금요일
    let end = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(); // 화요일
    let dates = weekday_range(start, end);

    assert_eq!(
      dates,
      vec![
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
      ]
    );
  }

  #[test]
  fn test_weekday_range_empty_when_reversed() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    assert!(weekday_range(start, end).is_empty());
  }

  #[test]
  fn test_next_fire_delay_bounded() {
    // 다음 실행까지의 대기는 주말을 포함해도 최대 4일 미만
    let delay = next_fire_delay(14, 30);
    assert!(delay <= std::time::Duration::from_secs(4 * 24 * 3600));
  }
}
