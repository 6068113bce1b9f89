//! Config - 설정 관리
//!
//! - `station.rs` - StationConfig (기상 관측소 설정) + 파일 단위 레이어

mod station;

pub use station::{StationConfig, StationConfigLayer, STATION_CONFIG_FILE};
