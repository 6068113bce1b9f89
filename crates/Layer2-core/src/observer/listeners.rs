//! 기본 옵저버 구현 (MobileApp, WebService)
//!
//! 각 옵저버는 자신만의 표시 버퍼를 소유하며 서로의 존재를 모릅니다.

use super::Observer;
use parking_lot::Mutex;
use tracing::info;

// ============================================================================
// DisplayBuffer
// ============================================================================

/// 수신한 값을 순서대로 보관하는 표시 버퍼
#[derive(Debug, Default)]
pub struct DisplayBuffer {
    values: Mutex<Vec<String>>,
}

impl DisplayBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, value: &str) {
        self.values.lock().push(value.to_string());
    }

    /// 수신한 값 전체 (수신 순서)
    pub fn values(&self) -> Vec<String> {
        self.values.lock().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.values.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }
}

// ============================================================================
// MobileApp
// ============================================================================

/// 모바일 앱 옵저버
#[derive(Debug, Default)]
pub struct MobileApp {
    display: DisplayBuffer,
}

impl MobileApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &DisplayBuffer {
        &self.display
    }

    /// 수신한 값 전체
    pub fn received(&self) -> Vec<String> {
        self.display.values()
    }

    pub fn last_value(&self) -> Option<String> {
        self.display.last()
    }
}

impl Observer for MobileApp {
    fn name(&self) -> &str {
        "mobile_app"
    }

    fn update(&self, value: &str) {
        info!("New value in mobile app is {}", value);
        self.display.push(value);
    }
}

// ============================================================================
// WebService
// ============================================================================

/// 웹 서비스 옵저버
#[derive(Debug, Default)]
pub struct WebService {
    display: DisplayBuffer,
}

impl WebService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &DisplayBuffer {
        &self.display
    }

    /// 수신한 값 전체
    pub fn received(&self) -> Vec<String> {
        self.display.values()
    }

    pub fn last_value(&self) -> Option<String> {
        self.display.last()
    }
}

impl Observer for WebService {
    fn name(&self) -> &str {
        "web_service"
    }

    fn update(&self, value: &str) {
        info!("New value in web service is {}", value);
        self.display.push(value);
    }
}
