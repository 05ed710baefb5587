//! 주식 이동평균 크로스오버 스크리너 라이브러리
//!
//! 일별 주가 데이터에서 골든 크로스/데드 크로스를 탐지하고
//! 거래대금 순위로 정렬한 시그널을 제공하는 시스템입니다.

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod market;
pub mod models;
pub mod storage;
pub mod utils;

// 핵심 타입 재노출
pub use crate::error::ScreenerError;
pub use crate::models::price::StockPrice;
pub use crate::models::signal::{CrossoverSignal, SignalType};
pub use crate::models::stock::Stock;
pub use crate::indicators::moving_average::MovingAverageResult;
pub use crate::core::detector::CrossoverDetector;
pub use crate::storage::Storage;

/// 버전 정보
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 결과 타입 별칭
pub type Result<T> = std::result::Result<T, ScreenerError>;
