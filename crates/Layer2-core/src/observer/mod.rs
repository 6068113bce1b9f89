//! Observer System - 동기식 옵저버 레지스트리
//!
//! Subject가 상태와 옵저버 목록을 소유하고, 상태가 바뀌면 등록 순서대로
//! 모든 옵저버의 `update`를 호출 스레드에서 즉시 호출합니다.
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Subject                              │
//! │  update_state(value) ──► state = value ──► notify(state)    │
//! │                                               │              │
//! │                              snapshot (Arc clone, 락 해제)   │
//! │         ┌─────────────────────┬───────────────┴─┐            │
//! │         ▼                     ▼                 ▼            │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐       │
//! │  │  Observer 1  │  │  Observer 2  │  │  Observer N  │       │
//! │  │ (MobileApp)  │  │ (WebService) │  │   (...)      │       │
//! │  └──────────────┘  └──────────────┘  └──────────────┘       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 사용법
//!
//! ```ignore
//! use watch_core::observer::{MobileApp, Observer, Subject};
//!
//! let subject = Subject::new("weather_station");
//! let app: Arc<dyn Observer> = Arc::new(MobileApp::new());
//!
//! subject.subscribe(app.clone());
//! subject.update_state("7");
//! subject.unsubscribe(&app);
//! ```

pub mod listeners;
pub mod subject;

pub use listeners::{DisplayBuffer, MobileApp, WebService};
pub use subject::{same_observer, SubscribeOutcome, Subject, UnsubscribeOutcome, DEFAULT_STATE};

/// 옵저버 trait
///
/// Subject로부터 상태 변경을 통지받는 컴포넌트가 구현합니다.
/// 반환값은 없으며, Subject는 호출 사실 외에 어떤 부수효과도 가정하지 않습니다.
pub trait Observer: Send + Sync {
    /// 옵저버 이름 (진단/로깅용)
    fn name(&self) -> &str;

    /// 새 상태값 수신
    fn update(&self, value: &str);
}
