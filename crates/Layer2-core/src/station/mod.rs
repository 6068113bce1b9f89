//! Weather Station - 온도 측정값을 Subject로 발행하는 관측소
//!
//! 비즈니스 로직(측정값 생성)은 여기, 등록/통지는 `Subject`가 담당합니다.

use crate::observer::Subject;
use rand::Rng;
use tracing::debug;
use watch_foundation::StationConfig;

/// 관측소 Subject 이름
pub const STATION_SUBJECT: &str = "weather_station";

/// 기상 관측소
///
/// ```ignore
/// let station = WeatherStation::new(StationConfig::default());
/// station.subject().subscribe(Arc::new(MobileApp::new()));
/// station.update_temperature_reading();
/// ```
#[derive(Debug)]
pub struct WeatherStation {
    config: StationConfig,
    subject: Subject,
}

impl WeatherStation {
    pub fn new(config: StationConfig) -> Self {
        let subject = Subject::with_state(STATION_SUBJECT, config.initial_reading.clone());
        Self { config, subject }
    }

    /// 구독/해제용 Subject
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn config(&self) -> &StationConfig {
        &self.config
    }

    /// 현재 온도
    pub fn temperature(&self) -> String {
        self.subject.state()
    }

    /// 새 측정값을 생성해 발행 (`round(random * max_reading)`)
    pub fn update_temperature_reading(&self) -> String {
        self.update_temperature_reading_with(&mut rand::thread_rng())
    }

    /// 주어진 RNG로 측정값 생성 후 발행
    ///
    /// `[0, 1)` 실수를 상한까지 늘린 뒤 반올림하므로 양 끝값(0, 상한)은
    /// 다른 값의 절반 확률로 나옵니다.
    pub fn update_temperature_reading_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let scaled = rng.gen::<f64>() * f64::from(self.config.max_reading);
        let reading = (scaled.round() as u32).to_string();
        debug!(reading = %reading, "Generated temperature reading");
        self.record_reading(reading.clone());
        reading
    }

    /// 외부 측정값 발행
    pub fn record_reading(&self, reading: impl Into<String>) {
        self.subject.update_state(reading);
    }
}

impl Default for WeatherStation {
    fn default() -> Self {
        Self::new(StationConfig::default())
    }
}
