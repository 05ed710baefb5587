// 스크리너 API 핸들러들

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use tokio::sync::RwLock;
use warp::http::StatusCode;
use warp::reply::{json, with_status, Reply};

use crate::core::data_sync::DataSyncService;
use crate::core::detector::UNRANKED_SORT_KEY;
use crate::storage::Storage;
use crate::utils::today_taipei;

/// 헬스체크 핸들러
pub async fn health_handler() -> Result<impl Reply, warp::Rejection> {
  let response = serde_json::json!({
    "status": "ok",
    "version": crate::VERSION
  });

  Ok(with_status(json(&response), StatusCode::OK))
}

/// 종목 레지스트리 조회 핸들러
pub async fn get_stocks(
  storage: Arc<RwLock<dyn Storage>>,
) -> Result<impl Reply, warp::Rejection> {
  let storage = storage.read().await;

  match storage.get_all_stocks().await {
    Ok(mut stocks) => {
      stocks.sort_by(|a, b| a.code.cmp(&b.code));
      Ok(with_status(json(&stocks), StatusCode::OK))
    }
    Err(e) => {
      let error_response = serde_json::json!({"error": format!("Failed to list stocks: {}", e)});
      Ok(with_status(json(&error_response), StatusCode::INTERNAL_SERVER_ERROR))
    }
  }
}

/// 일자별 크로스오버 신호 조회 핸들러
pub async fn get_signals(
  date: String,
  storage: Arc<RwLock<dyn Storage>>,
) -> Result<impl Reply, warp::Rejection> {
  let date = match NaiveDate::parse_from_str(&date, "%Y-%m-%d") {
    Ok(date) => date,
    Err(_) => {
      let error_response = serde_json::json!({"error": "Invalid date, expected YYYY-MM-DD"});
      return Ok(with_status(json(&error_response), StatusCode::BAD_REQUEST));
    }
  };

  let storage = storage.read().await;

  match storage.get_signals_by_date(date).await {
    Ok(mut signals) => {
      // 저장소는 순서를 보장하지 않으므로 응답 전에 순위로 정렬
      signals.sort_by_key(|s| s.volume_rank.unwrap_or(UNRANKED_SORT_KEY));
      Ok(with_status(json(&signals), StatusCode::OK))
    }
    Err(e) => {
      let error_response = serde_json::json!({"error": format!("Failed to get signals: {}", e)});
      Ok(with_status(json(&error_response), StatusCode::INTERNAL_SERVER_ERROR))
    }
  }
}

/// 시장 데이터 상태 조회 핸들러
pub async fn get_status(
  storage: Arc<RwLock<dyn Storage>>,
) -> Result<impl Reply, warp::Rejection> {
  let storage = storage.read().await;

  let latest_date = match storage.latest_price_date().await {
    Ok(date) => date,
    Err(e) => {
      let error_response = serde_json::json!({"error": format!("Failed to get status: {}", e)});
      return Ok(with_status(json(&error_response), StatusCode::INTERNAL_SERVER_ERROR));
    }
  };

  let stock_count = match storage.get_all_stocks().await {
    Ok(stocks) => stocks.len(),
    Err(_) => 0,
  };

  let response = serde_json::json!({
    "latest_date": latest_date,
    "stock_count": stock_count
  });

  Ok(with_status(json(&response), StatusCode::OK))
}

/// 수동 동기화 요청 모델
#[derive(Debug, Deserialize)]
pub struct SyncRequest {
  pub date: Option<String>,
}

/// 수동 동기화 핸들러
pub async fn run_sync(
  req: SyncRequest,
  data_sync: Arc<DataSyncService>,
) -> Result<impl Reply, warp::Rejection> {
  let date = match req.date {
    Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
      Ok(date) => date,
      Err(_) => {
        let error_response = serde_json::json!({"error": "Invalid date, expected YYYY-MM-DD"});
        return Ok(with_status(json(&error_response), StatusCode::BAD_REQUEST));
      }
    },
    None => today_taipei(),
  };

  match data_sync.full_sync(date).await {
    Ok((synced, signals)) => {
      let response = serde_json::json!({
        "status": "success",
        "date": date,
        "synced_stocks": synced,
        "signals": signals
      });
      Ok(with_status(json(&response), StatusCode::OK))
    }
    Err(e) => {
      let error_response = serde_json::json!({"error": format!("Sync failed: {}", e)});
      Ok(with_status(json(&error_response), StatusCode::INTERNAL_SERVER_ERROR))
    }
  }
}
