//! Station Config - 관측소 설정
//!
//! 글로벌 → 프로젝트 → 명시적 경로 순으로 병합됩니다 (뒤가 우선).

use crate::storage::{load_path, JsonStore};
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// 설정 파일명
pub const STATION_CONFIG_FILE: &str = "station.json";

// ============================================================================
// Station Config
// ============================================================================

/// 기상 관측소 설정 (병합 + 검증이 끝난 최종값)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationConfig {
    /// 버전 (마이그레이션용)
    pub version: u32,

    /// Subject의 초기 상태값
    pub initial_reading: String,

    /// 랜덤 측정값 상한 (포함)
    pub max_reading: u32,

    /// 두 옵저버가 모두 구독 중일 때 측정 횟수 (데모 드라이버용)
    pub readings: usize,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            version: 1,
            initial_reading: "0".to_string(),
            max_reading: 10,
            readings: 2,
        }
    }
}

/// 설정 파일 한 개의 내용
///
/// 파일에 적힌 필드만 `Some`이 되고, 병합 시 그 필드만 덮어씁니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StationConfigLayer {
    pub version: Option<u32>,
    pub initial_reading: Option<String>,
    pub max_reading: Option<u32>,
    pub readings: Option<usize>,
}

impl StationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Load
    // ========================================================================

    /// 글로벌 + 프로젝트 병합 로드
    pub fn load() -> Result<Self> {
        Self::load_from_stores(&default_stores())
    }

    /// 주어진 저장소들을 순서대로 병합 로드 (뒤가 우선)
    pub fn load_from_stores(stores: &[JsonStore]) -> Result<Self> {
        let config = Self::merge_stores(stores)?;
        config.validate()?;
        Ok(config)
    }

    /// 기본 소스 위에 명시적 설정 파일을 병합
    pub fn load_with_override(path: &Path) -> Result<Self> {
        Self::load_from_stores_with_override(&default_stores(), path)
    }

    /// 저장소들을 병합한 뒤 명시적 파일을 마지막으로 병합
    pub fn load_from_stores_with_override(stores: &[JsonStore], path: &Path) -> Result<Self> {
        let mut config = Self::merge_stores(stores)?;
        let explicit: StationConfigLayer = load_path(path)?;
        debug!(path = %path.display(), "Merging explicit station config");
        config.merge(explicit);
        config.validate()?;
        Ok(config)
    }

    fn merge_stores(stores: &[JsonStore]) -> Result<Self> {
        let mut config = Self::new();
        for store in stores {
            if let Some(layer) = store.load_optional::<StationConfigLayer>(STATION_CONFIG_FILE)? {
                debug!(dir = %store.base_dir().display(), "Merging station config");
                config.merge(layer);
            }
        }
        Ok(config)
    }

    // ========================================================================
    // Merge / Validate
    // ========================================================================

    /// 레이어와 병합 (레이어에 적힌 필드가 우선)
    pub fn merge(&mut self, layer: StationConfigLayer) {
        if let Some(version) = layer.version {
            self.version = version;
        }
        if let Some(initial_reading) = layer.initial_reading {
            self.initial_reading = initial_reading;
        }
        if let Some(max_reading) = layer.max_reading {
            self.max_reading = max_reading;
        }
        if let Some(readings) = layer.readings {
            self.readings = readings;
        }
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<()> {
        if self.initial_reading.trim().is_empty() {
            return Err(Error::Config(
                "initialReading must not be empty".to_string(),
            ));
        }
        if self.max_reading == 0 {
            return Err(Error::Config(
                "maxReading must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn initial_reading(mut self, reading: impl Into<String>) -> Self {
        self.initial_reading = reading.into();
        self
    }

    pub fn max_reading(mut self, max: u32) -> Self {
        self.max_reading = max;
        self
    }

    pub fn readings(mut self, readings: usize) -> Self {
        self.readings = readings;
        self
    }
}

/// 글로벌, 프로젝트 순 (찾을 수 없는 디렉토리는 건너뜀)
fn default_stores() -> Vec<JsonStore> {
    [JsonStore::global(), JsonStore::current_project()]
        .into_iter()
        .filter_map(|store| store.ok())
        .collect()
}
