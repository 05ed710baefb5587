use std::sync::Arc;

use tokio::sync::RwLock;
use warp::Filter;

use crate::api::handlers;
use crate::core::data_sync::DataSyncService;
use crate::storage::Storage;

/// 스크리너 API 라우트 생성
pub fn create_routes(
    storage: Arc<RwLock<dyn Storage>>,
    data_sync: Arc<DataSyncService>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // 헬스체크 라우트
    let health = warp::path("health")
        .and(warp::get())
        .and_then(handlers::health_handler);

    // 상태 필터 생성
    let storage_filter = warp::any().map(move || storage.clone());
    let data_sync_filter = warp::any().map(move || data_sync.clone());

    // 종목 레지스트리 라우트
    let stocks = warp::path("stocks")
        .and(warp::get())
        .and(storage_filter.clone())
        .and_then(handlers::get_stocks);

    // 일자별 크로스오버 신호 라우트
    let signals = warp::path("signals")
        .and(warp::path::param::<String>())
        .and(warp::get())
        .and(storage_filter.clone())
        .and_then(handlers::get_signals);

    // 시장 데이터 상태 라우트
    let status = warp::path("status")
        .and(warp::get())
        .and(storage_filter.clone())
        .and_then(handlers::get_status);

    // 수동 동기화 라우트
    let sync = warp::path("sync")
        .and(warp::post())
        .and(warp::body::json())
        .and(data_sync_filter.clone())
        .and_then(handlers::run_sync);

    // 모든 라우트 결합
    health
        .or(stocks)
        .or(signals)
        .or(status)
        .or(sync)
}
