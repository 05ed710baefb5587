//! 로깅 유틸리티
//!
//! 로그 초기화 및 유틸리티 함수 제공

use std::env;

use env_logger::Builder;
use log::LevelFilter;

use crate::error::ScreenerError;

/// 로깅 시스템 초기화
pub fn init() -> Result<(), ScreenerError> {
  let mut builder = Builder::from_default_env();

  // RUST_LOG 환경변수 확인
  let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

  // 로그 레벨 파싱
  let level_filter = match log_level.to_lowercase().as_str() {
    "trace" => LevelFilter::Trace,
    "debug" => LevelFilter::Debug,
    "info" => LevelFilter::Info,
    "warn" => LevelFilter::Warn,
    "error" => LevelFilter::Error,
    _ => LevelFilter::Info,
  };

  builder
    .filter_level(level_filter)
    .format_timestamp_millis()
    .init();

  log::info!("로깅 시스템 초기화 완료: 레벨 = {}", log_level);

  Ok(())
}
