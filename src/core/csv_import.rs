/**
* filename : csv_import
* author : HAMA
* date: 2025. 5. 14.
* description: CSV 파일 기반 과거 주가 데이터 가져오기
**/

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::error::ScreenerError;
use crate::models::price::StockPrice;
use crate::models::stock::Stock;
use crate::storage::Storage;

#[derive(Debug, serde::Deserialize)]
struct CsvRow {
  stock_code: String,
  date: NaiveDate,
  open: f64,
  high: f64,
  low: f64,
  close: f64,
  volume: u64,
  volume_value: u64,
}

/// CSV 과거 데이터 가져오기
///
/// 헤더: stock_code,date,open,high,low,close,volume,volume_value
/// 미등록 종목은 코드를 이름으로 해서 레지스트리에 추가한다.
pub struct CsvHistoryImporter {
  storage: Arc<RwLock<dyn Storage>>,
}

impl CsvHistoryImporter {
  pub fn new(storage: Arc<RwLock<dyn Storage>>) -> Self {
    CsvHistoryImporter { storage }
  }

  /// 파일 전체를 읽어 저장소에 반영하고 반영한 행 수를 반환
  pub async fn import_file(&self, path: &Path) -> Result<usize, ScreenerError> {
    log::info!("[Import] {} 가져오기 시작", path.display());

    let mut reader = csv::Reader::from_path(path)
      .map_err(|e| ScreenerError::ParseError(format!("Failed to open CSV: {}", e)))?;

    // csv는 동기 reader이므로 행을 모두 읽은 뒤 저장소에 반영
    let mut rows = Vec::new();
    for record in reader.deserialize() {
      let row: CsvRow = record.map_err(|e| ScreenerError::ParseError(e.to_string()))?;
      rows.push(row);
    }

    let count = rows.len();
    let mut storage = self.storage.write().await;

    for row in rows {
      if storage.get_stock(&row.stock_code).await?.is_none() {
        storage
          .create_stock(&Stock::new(&row.stock_code, &row.stock_code))
          .await?;
      }

      storage
        .upsert_stock_price(&StockPrice::new(
          &row.stock_code,
          row.date,
          row.open,
          row.high,
          row.low,
          row.close,
          row.volume,
          row.volume_value,
        ))
        .await?;
    }

    log::info!("[Import] {} 건 반영 완료", count);

    Ok(count)
  }
}
