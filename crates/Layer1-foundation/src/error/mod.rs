//! Error types for WeatherWatch
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// WeatherWatch 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 구독 관련 (복구 가능, no-op으로 처리됨)
    // ========================================================================
    #[error("Observer is already subscribed: {0}")]
    DuplicateSubscription(String),

    #[error("Observer is not subscribed: {0}")]
    UnknownObserver(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 구독 상태 관련 진단인지 확인
    ///
    /// 이 에러들은 실패가 아니라 무시된 요청을 나타냅니다.
    pub fn is_subscription_diagnostic(&self) -> bool {
        matches!(
            self,
            Error::DuplicateSubscription(_) | Error::UnknownObserver(_)
        )
    }

    /// 중복 구독 에러 생성 헬퍼
    pub fn duplicate(observer: impl Into<String>) -> Self {
        Error::DuplicateSubscription(observer.into())
    }

    /// 미등록 옵저버 에러 생성 헬퍼
    pub fn unknown(observer: impl Into<String>) -> Self {
        Error::UnknownObserver(observer.into())
    }
}
