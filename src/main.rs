/**
* filename : main
* author : HAMA
* date: 2025. 5. 14.
* description:
**/

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use xScreener::api::routes;
use xScreener::config::Config;
use xScreener::core::csv_import::CsvHistoryImporter;
use xScreener::core::data_sync::DataSyncService;
use xScreener::core::scheduler::SyncScheduler;
use xScreener::market::mocks::MockMarketClient;
use xScreener::market::traits::MarketDataClient;
use xScreener::market::twse::TwseClient;
use xScreener::storage::memory::MemoryStorage;
use xScreener::storage::Storage;
use xScreener::utils::logging;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // 로깅 초기화
    logging::init()?;
    log::info!("주식 크로스오버 스크리너 시작...");

    // 설정 로드
    let config = Config::load()?;
    log::info!("설정 로드 완료");

    // 저장소 초기화
    let storage: Arc<RwLock<dyn Storage>> = Arc::new(RwLock::new(MemoryStorage::new()));

    // 시장 데이터 클라이언트 생성
    let market: Arc<dyn MarketDataClient> = if config.market.use_mock {
        log::info!("모의 시장 데이터 클라이언트 사용");
        Arc::new(MockMarketClient::new())
    } else {
        Arc::new(TwseClient::new(&config.market.base_url, config.market.timeout_ms)?)
    };

    // 동기화 서비스 생성
    let data_sync = Arc::new(DataSyncService::new(storage.clone(), market));

    // 명령줄 인수 확인
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("backfill") => run_backfill(&args, data_sync).await?,
        Some("import") => run_import(&args, storage).await?,
        _ => run_server(config, storage, data_sync).await?,
    }

    Ok(())
}

async fn run_server(
    config: Config,
    storage: Arc<RwLock<dyn Storage>>,
    data_sync: Arc<DataSyncService>,
) -> Result<(), anyhow::Error> {
    // 일일 동기화 스케줄러 시작
    let mut scheduler = SyncScheduler::new(data_sync.clone(), config.sync.hour, config.sync.minute);
    scheduler.start_daily_sync();

    // API 라우트 초기화
    let api = routes::create_routes(storage, data_sync);
    log::info!("API 라우트 초기화 완료");

    // Warp 서버 시작
    let addr: std::net::SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {}", e))?;
    log::info!("서버 시작: http://{}/", addr);
    warp::serve(api).run(addr).await;

    Ok(())
}

async fn run_backfill(
    args: &[String],
    data_sync: Arc<DataSyncService>,
) -> Result<(), anyhow::Error> {
    // 사용법: xScreener backfill <시작일> <종료일>
    let (start_raw, end_raw) = match (args.get(2), args.get(3)) {
        (Some(start), Some(end)) => (start, end),
        _ => anyhow::bail!("Usage: backfill <start YYYY-MM-DD> <end YYYY-MM-DD>"),
    };

    let start = NaiveDate::parse_from_str(start_raw, "%Y-%m-%d")?;
    let end = NaiveDate::parse_from_str(end_raw, "%Y-%m-%d")?;

    log::info!("과거 데이터 수집 모드: {} ~ {}", start, end);
    data_sync.initialize_historical_data(start, end).await?;

    Ok(())
}

async fn run_import(
    args: &[String],
    storage: Arc<RwLock<dyn Storage>>,
) -> Result<(), anyhow::Error> {
    // 사용법: xScreener import <CSV 경로>
    let path = match args.get(2) {
        Some(path) => path,
        None => anyhow::bail!("Usage: import <path to CSV>"),
    };

    let importer = CsvHistoryImporter::new(storage);
    let count = importer.import_file(Path::new(path)).await?;
    log::info!("CSV 가져오기 완료: {} 건", count);

    Ok(())
}
