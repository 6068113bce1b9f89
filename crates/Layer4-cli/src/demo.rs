//! 관측소 데모 시나리오
//!
//! MobileApp, WebService 구독 → N회 측정 → WebService 해제 → 1회 측정

use rand::Rng;
use std::sync::Arc;
use tracing::info;
use watch_core::{MobileApp, Observer, WeatherStation, WebService};

/// 시나리오 실행 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// 발행된 측정값 (순서대로)
    pub readings: Vec<String>,
    /// MobileApp이 받은 값
    pub mobile_app: Vec<String>,
    /// WebService가 받은 값
    pub web_service: Vec<String>,
}

/// 시나리오 실행
pub fn run<R: Rng + ?Sized>(station: &WeatherStation, readings: usize, rng: &mut R) -> DemoReport {
    let mobile_app = Arc::new(MobileApp::new());
    let web_service = Arc::new(WebService::new());
    let web_handle: Arc<dyn Observer> = web_service.clone();

    station.subject().subscribe(mobile_app.clone());
    station.subject().subscribe(web_handle.clone());

    let mut published = Vec::with_capacity(readings + 1);
    for i in 0..readings {
        if i == 1 {
            info!("Value was updated");
        }
        published.push(station.update_temperature_reading_with(rng));
    }

    station.subject().unsubscribe(&web_handle);
    info!("Web service unsubscribed");

    published.push(station.update_temperature_reading_with(rng));

    DemoReport {
        readings: published,
        mobile_app: mobile_app.received(),
        web_service: web_service.received(),
    }
}
