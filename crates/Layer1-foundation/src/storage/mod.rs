//! Storage module for WeatherWatch
//!
//! - `json`: JSON - 설정 파일 저장/로드

mod json;

pub use json::{load_path, JsonStore, GLOBAL_DIR_NAME, PROJECT_DIR_NAME};
