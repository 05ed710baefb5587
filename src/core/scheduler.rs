/**
* filename : data_sync
* author : HAMA
* date: 2025. 5. 14.
* description: 일일 동기화 스케줄러
**/

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::core::data_sync::DataSyncService;
use crate::utils::{next_fire_delay, today_taipei};

/// 일일 동기화 스케줄러
///
/// 매 영업일 지정 시각(타이베이 기준)에 전체 동기화를 실행한다.
/// 대만 증시 마감(13:30) 이후로 잡아야 당일 데이터가 있다.
pub struct SyncScheduler {
  data_sync: Arc<DataSyncService>,
  hour: u32,
  minute: u32,
  daily_job: Option<JoinHandle<()>>,
}

impl SyncScheduler {
  pub fn new(data_sync: Arc<DataSyncService>, hour: u32, minute: u32) -> Self {
    SyncScheduler {
      data_sync,
      hour,
      minute,
      daily_job: None,
    }
  }

  /// 일일 자동 동기화 시작
  pub fn start_daily_sync(&mut self) {
    let data_sync = self.data_sync.clone();
    let (hour, minute) = (self.hour, self.minute);

    let handle = tokio::spawn(async move {
      loop {
        // 다음 평일 실행 시각까지 대기
        let wait = next_fire_delay(hour, minute);
        tokio::time::sleep(wait).await;

        let today = today_taipei();
        log::info!("[Scheduler] {} 일일 동기화 실행", today);

        // 실패해도 다음 실행 주기는 유지
        match data_sync.full_sync(today).await {
          Ok((synced, signals)) => {
            log::info!("[Scheduler] 일일 동기화 완료: 종목 {} / 신호 {}", synced, signals)
          }
          Err(e) => log::error!("[Scheduler] 일일 동기화 실패: {}", e),
        }
      }
    });

    self.daily_job = Some(handle);
    log::info!(
      "[Scheduler] 일일 동기화 작업 시작 ({:02}:{:02} 타이베이, 월-금)",
      self.hour,
      self.minute
    );
  }

  /// 일일 자동 동기화 중지
  pub fn stop_daily_sync(&mut self) {
    if let Some(handle) = self.daily_job.take() {
      handle.abort();
      log::info!("[Scheduler] 일일 동기화 작업 중지");
    }
  }
}
