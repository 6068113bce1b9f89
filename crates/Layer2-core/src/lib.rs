//! watch-core: Core Runtime for WeatherWatch
//!
//! Layer2 - 옵저버 레지스트리와 관측소 레이어
//!
//! # 주요 모듈
//!
//! - `observer`: Observer trait, Subject (등록/해제/통지), 기본 옵저버
//! - `station`: WeatherStation (측정값 생성 → Subject 발행)
//!
//! # 사용 예시
//!
//! ```ignore
//! use watch_core::{MobileApp, Observer, WeatherStation, WebService};
//!
//! let station = WeatherStation::default();
//! let web: Arc<dyn Observer> = Arc::new(WebService::new());
//!
//! station.subject().subscribe(Arc::new(MobileApp::new()));
//! station.subject().subscribe(web.clone());
//! station.update_temperature_reading();
//!
//! station.subject().unsubscribe(&web);
//! ```

pub mod observer;
pub mod station;

// Re-exports: Observer
pub use observer::{
    DisplayBuffer, MobileApp, Observer, Subject, SubscribeOutcome, UnsubscribeOutcome, WebService,
    DEFAULT_STATE,
};

// Re-exports: Station
pub use station::{WeatherStation, STATION_SUBJECT};

// Re-exports: Foundation
pub use watch_foundation::{Error, Result, StationConfig};
