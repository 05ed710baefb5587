//! HTTP API 테스트
//!
//! warp 테스트 유틸리티로 라우트와 핸들러 동작 확인

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;
use xScreener::api::routes::create_routes;
use xScreener::core::data_sync::DataSyncService;
use xScreener::market::mocks::MockMarketClient;
use xScreener::models::price::StockPrice;
use xScreener::models::signal::{CrossoverSignal, SignalType};
use xScreener::storage::memory::MemoryStorage;
use xScreener::storage::Storage;

fn new_storage() -> Arc<RwLock<dyn Storage>> {
  Arc::new(RwLock::new(MemoryStorage::new()))
}

fn build_api(
  storage: Arc<RwLock<dyn Storage>>,
) -> impl warp::Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
  let data_sync = Arc::new(DataSyncService::new(
    storage.clone(),
    Arc::new(MockMarketClient::new()),
  ));
  create_routes(storage, data_sync)
}

fn signal(code: &str, date: NaiveDate, volume_rank: Option<u32>) -> CrossoverSignal {
  CrossoverSignal {
    stock_code: code.to_string(),
    stock_name: format!("Stock {}", code),
    signal_type: SignalType::Golden,
    cross_date: date,
    price: 100.0,
    short_ma: 101.0,
    long_ma: 100.5,
    volume_rank,
  }
}

#[tokio::test]
async fn test_health_endpoint() {
  let api = build_api(new_storage());

  let response = warp::test::request()
    .method("GET")
    .path("/health")
    .reply(&api)
    .await;

  assert_eq!(response.status(), 200);

  let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
  assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_signals_endpoint_rejects_bad_date() {
  let api = build_api(new_storage());

  let response = warp::test::request()
    .method("GET")
    .path("/signals/not-a-date")
    .reply(&api)
    .await;

  assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_signals_endpoint_sorted_by_rank() {
  let storage = new_storage();
  let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

  {
    let mut st = storage.write().await;
    // 순위 없는 신호를 먼저 넣어도 응답은 순위순이어야 함
    st.upsert_crossover_signal(&signal("1101", date, None)).await.unwrap();
    st.upsert_crossover_signal(&signal("2330", date, Some(1))).await.unwrap();
    st.upsert_crossover_signal(&signal("2317", date, Some(2))).await.unwrap();
  }

  let api = build_api(storage);

  let response = warp::test::request()
    .method("GET")
    .path("/signals/2024-03-15")
    .reply(&api)
    .await;

  assert_eq!(response.status(), 200);

  let body: Vec<CrossoverSignal> = serde_json::from_slice(response.body()).unwrap();
  let codes: Vec<&str> = body.iter().map(|s| s.stock_code.as_str()).collect();
  assert_eq!(codes, vec!["2330", "2317", "1101"]);
}

#[tokio::test]
async fn test_status_endpoint() {
  let storage = new_storage();
  let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

  {
    let mut st = storage.write().await;
    st.upsert_stock_price(&StockPrice::new(
      "2330", date, 99.0, 101.0, 98.0, 100.0, 1_000, 100_000,
    ))
    .await
    .unwrap();
  }

  let api = build_api(storage);

  let response = warp::test::request()
    .method("GET")
    .path("/status")
    .reply(&api)
    .await;

  assert_eq!(response.status(), 200);

  let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
  assert_eq!(body["latest_date"], "2024-03-15");
}

#[tokio::test]
async fn test_manual_sync_endpoint() {
  let storage = new_storage();
  let api = build_api(storage.clone());

  // 2024-03-15는 금요일이므로 모의 클라이언트가 시세를 돌려줌
  let response = warp::test::request()
    .method("POST")
    .path("/sync")
    .json(&serde_json::json!({"date": "2024-03-15"}))
    .reply(&api)
    .await;

  assert_eq!(response.status(), 200);

  let st = storage.read().await;
  let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
  let prices = st.get_stock_prices_by_date(date).await.unwrap();
  assert!(!prices.is_empty());
}
