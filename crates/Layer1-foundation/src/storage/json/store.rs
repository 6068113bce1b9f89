//! JSON 설정 디렉토리

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 글로벌 설정 디렉토리 이름 (`<config_dir>/weatherwatch`)
pub const GLOBAL_DIR_NAME: &str = "weatherwatch";

/// 프로젝트 설정 디렉토리 이름 (`./.weatherwatch`)
pub const PROJECT_DIR_NAME: &str = ".weatherwatch";

/// 설정 파일을 찾는 디렉토리 하나 (글로벌 또는 프로젝트)
#[derive(Debug, Clone)]
pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// 글로벌 설정 (~/.config/weatherwatch/)
    pub fn global() -> Result<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Cannot find config directory".to_string()))?;
        Ok(Self::new(dir.join(GLOBAL_DIR_NAME)))
    }

    /// 현재 디렉토리의 프로젝트 설정 (.weatherwatch/)
    pub fn current_project() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?.join(PROJECT_DIR_NAME)))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// 파일이 없으면 `None`, 있으면 파싱 결과
    pub fn load_optional<T: DeserializeOwned>(&self, filename: &str) -> Result<Option<T>> {
        let path = self.base_dir.join(filename);
        if !path.exists() {
            return Ok(None);
        }
        load_path(&path).map(Some)
    }
}

/// 임의 경로에서 JSON 로드
///
/// 읽기 실패는 `Error::Io`, 파싱 실패는 `Error::Json`으로 전파됩니다.
pub fn load_path<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), "Loaded JSON file");
    Ok(serde_json::from_str(&content)?)
}
