//! # watch-foundation
//!
//! Foundation layer for WeatherWatch:
//! - Error: 중앙 에러 타입 (구독 진단 포함)
//! - Storage: JsonStore (글로벌/프로젝트 설정 디렉토리)
//! - Config: StationConfig (병합 + 검증)

pub mod config;
pub mod error;
pub mod storage;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{StationConfig, StationConfigLayer, STATION_CONFIG_FILE};

// ============================================================================
// Storage (저장소)
// ============================================================================
pub use storage::{JsonStore, GLOBAL_DIR_NAME, PROJECT_DIR_NAME};
