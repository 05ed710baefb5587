/**
* filename : signal
* author : HAMA
* date: 2025. 5. 12.
* description:
**/

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 크로스오버 신호 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalType {
    /// 골든 크로스 - 단기선이 장기선을 상향 돌파 (강세)
    Golden,
    /// 데드 크로스 - 단기선이 장기선을 하향 돌파 (약세)
    Death,
}

impl SignalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalType::Golden => "golden",
            SignalType::Death => "death",
        }
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 탐지된 크로스오버 신호
///
/// (stock_code, cross_date, signal_type) 조합당 최대 1건.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossoverSignal {
    pub stock_code: String,
    pub stock_name: String,
    pub signal_type: SignalType,
    pub cross_date: NaiveDate,
    /// 크로스 발생일 종가
    pub price: f64,
    pub short_ma: f64,
    pub long_ma: f64,
    /// 당일 거래대금 순위 (1부터 시작, 상위 200 밖이면 None)
    pub volume_rank: Option<u32>,
}
