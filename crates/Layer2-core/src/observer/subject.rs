//! Subject - 옵저버 레지스트리 + 통지기
//!
//! 등록 순서를 유지하는 집합 의미의 옵저버 목록과 관측 가능한 상태를 소유합니다.
//! 중복 구독과 미등록 해제는 실패가 아니라 no-op + 진단으로 처리됩니다.

use super::Observer;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace, warn};
use watch_foundation::{Error, Result};

/// Subject 상태 기본값
pub const DEFAULT_STATE: &str = "0";

/// 두 핸들이 같은 옵저버 인스턴스를 가리키는지 확인 (포인터 동일성)
///
/// vtable 포인터는 비교하지 않습니다. 같은 할당이면 같은 옵저버입니다.
pub fn same_observer(a: &Arc<dyn Observer>, b: &Arc<dyn Observer>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

// ============================================================================
// Outcomes
// ============================================================================

/// 구독 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// 목록 끝에 추가됨
    Added { position: usize },
    /// 이미 구독 중이라 무시됨
    AlreadySubscribed { observer: String },
}

impl SubscribeOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added { .. })
    }

    /// `?` 전파가 필요한 호출자를 위한 변환
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Added { .. } => Ok(()),
            Self::AlreadySubscribed { observer } => Err(Error::duplicate(observer)),
        }
    }
}

/// 구독 해제 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnsubscribeOutcome {
    /// 해당 위치에서 제거됨
    Removed { position: usize },
    /// 구독 중이 아니라 무시됨
    NotSubscribed { observer: String },
}

impl UnsubscribeOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed { .. })
    }

    /// `?` 전파가 필요한 호출자를 위한 변환
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Removed { .. } => Ok(()),
            Self::NotSubscribed { observer } => Err(Error::unknown(observer)),
        }
    }
}

// ============================================================================
// Subject
// ============================================================================

/// 관측 가능한 상태와 옵저버 목록
///
/// # Invariants
///
/// 1. `observers`에는 같은 인스턴스가 두 번 들어가지 않습니다.
/// 2. 통지는 등록 순서대로, 호출 스레드에서 동기적으로 이루어집니다.
/// 3. `state`는 `update_state`로만 바뀌며, 바뀔 때마다 반드시 통지됩니다.
/// 4. 통지 중 발생한 구독/해제는 다음 통지부터 반영됩니다 (snapshot).
pub struct Subject {
    /// 이름 (디버깅용)
    name: String,

    /// 현재 상태
    state: RwLock<String>,

    /// 등록된 옵저버 (등록 순서)
    observers: RwLock<Vec<Arc<dyn Observer>>>,

    /// 완료된 통지 횟수
    notification_count: AtomicU64,
}

impl Subject {
    /// 기본 상태("0")로 생성
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_state(name, DEFAULT_STATE)
    }

    /// 초기 상태를 지정해서 생성
    pub fn with_state(name: impl Into<String>, initial: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: RwLock::new(initial.into()),
            observers: RwLock::new(Vec::new()),
            notification_count: AtomicU64::new(0),
        }
    }

    // ========================================================================
    // 등록 / 해제
    // ========================================================================

    /// 옵저버 등록
    ///
    /// 이미 등록된 인스턴스면 아무것도 바꾸지 않고 `AlreadySubscribed`를 반환합니다.
    pub fn subscribe(&self, observer: Arc<dyn Observer>) -> SubscribeOutcome {
        let added = {
            let mut observers = self.observers.write();
            if observers.iter().any(|o| same_observer(o, &observer)) {
                None
            } else {
                observers.push(Arc::clone(&observer));
                Some(observers.len() - 1)
            }
        };

        match added {
            Some(position) => {
                debug!(
                    subject = %self.name,
                    observer = observer.name(),
                    position,
                    "Registered observer"
                );
                SubscribeOutcome::Added { position }
            }
            None => {
                warn!(
                    subject = %self.name,
                    observer = observer.name(),
                    "Observer is already subscribed"
                );
                SubscribeOutcome::AlreadySubscribed {
                    observer: observer.name().to_string(),
                }
            }
        }
    }

    /// 옵저버 해제
    ///
    /// 첫 번째 옵저버(위치 0)도 정상적으로 제거됩니다.
    pub fn unsubscribe(&self, observer: &Arc<dyn Observer>) -> UnsubscribeOutcome {
        let removed = {
            let mut observers = self.observers.write();
            let position = observers.iter().position(|o| same_observer(o, observer));
            position.map(|position| (position, observers.remove(position)))
        };

        match removed {
            Some((position, _handle)) => {
                debug!(
                    subject = %self.name,
                    observer = observer.name(),
                    position,
                    "Unregistered observer"
                );
                UnsubscribeOutcome::Removed { position }
            }
            None => {
                warn!(
                    subject = %self.name,
                    observer = observer.name(),
                    "Observer does not exist"
                );
                UnsubscribeOutcome::NotSubscribed {
                    observer: observer.name().to_string(),
                }
            }
        }
    }

    // ========================================================================
    // 통지
    // ========================================================================

    /// 등록된 모든 옵저버에게 `value` 전달
    ///
    /// 시작 시점의 목록을 복사한 뒤 락을 풀고 호출하므로, 옵저버가 콜백 안에서
    /// 구독/해제를 해도 교착되지 않고 진행 중인 통지에는 영향이 없습니다.
    pub fn notify(&self, value: &str) {
        let snapshot: Vec<Arc<dyn Observer>> = self.observers.read().iter().cloned().collect();

        for observer in &snapshot {
            trace!(
                subject = %self.name,
                observer = observer.name(),
                value,
                "Delivering update"
            );
            observer.update(value);
        }

        self.notification_count.fetch_add(1, Ordering::SeqCst);
    }

    /// 상태 변경 후 통지
    ///
    /// 상태를 바꾸는 유일한 경로이며, 항상 `notify`를 호출합니다.
    pub fn update_state(&self, value: impl Into<String>) {
        let value = value.into();
        *self.state.write() = value.clone();

        debug!(subject = %self.name, state = %value, "State updated");
        self.notify(&value);
    }

    // ========================================================================
    // 조회
    // ========================================================================

    /// 현재 상태
    pub fn state(&self) -> String {
        self.state.read().clone()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 등록된 옵저버 수
    pub fn observer_count(&self) -> usize {
        self.observers.read().len()
    }

    /// 등록 여부
    pub fn is_subscribed(&self, observer: &Arc<dyn Observer>) -> bool {
        self.observers
            .read()
            .iter()
            .any(|o| same_observer(o, observer))
    }

    /// 등록 순서대로 옵저버 이름 목록
    pub fn observer_names(&self) -> Vec<String> {
        self.observers
            .read()
            .iter()
            .map(|o| o.name().to_string())
            .collect()
    }

    /// 완료된 통지 횟수
    pub fn notification_count(&self) -> u64 {
        self.notification_count.load(Ordering::SeqCst)
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::new("subject")
    }
}

impl std::fmt::Debug for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subject")
            .field("name", &self.name)
            .field("state", &*self.state.read())
            .field("observers", &self.observer_names())
            .field("notification_count", &self.notification_count())
            .finish()
    }
}

// ============================================================================
// 테스트
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Weak;

    /// 모든 옵저버가 공유하는 호출 기록 ("이름:값")
    type Journal = Arc<Mutex<Vec<String>>>;

    struct Recorder {
        name: String,
        journal: Journal,
        received: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn new(name: &str, journal: &Journal) -> Arc<Self> {
            Arc::new(Self {
                name: name.to_string(),
                journal: Arc::clone(journal),
                received: Mutex::new(Vec::new()),
            })
        }

        fn received(&self) -> Vec<String> {
            self.received.lock().clone()
        }
    }

    impl Observer for Recorder {
        fn name(&self) -> &str {
            &self.name
        }

        fn update(&self, value: &str) {
            self.journal.lock().push(format!("{}:{}", self.name, value));
            self.received.lock().push(value.to_string());
        }
    }

    fn journal() -> Journal {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn as_dyn(recorder: &Arc<Recorder>) -> Arc<dyn Observer> {
        recorder.clone()
    }

    #[test]
    fn test_default_state() {
        let subject = Subject::new("station");
        assert_eq!(subject.state(), "0");
        assert_eq!(subject.observer_count(), 0);
        assert_eq!(subject.notification_count(), 0);
    }

    #[test]
    fn test_subscribe_is_idempotent() {
        let log = journal();
        let a = Recorder::new("a", &log);
        let subject = Subject::new("station");

        assert_eq!(
            subject.subscribe(as_dyn(&a)),
            SubscribeOutcome::Added { position: 0 }
        );
        let second = subject.subscribe(as_dyn(&a));
        assert_eq!(
            second,
            SubscribeOutcome::AlreadySubscribed {
                observer: "a".to_string()
            }
        );
        assert_eq!(subject.observer_count(), 1);

        subject.update_state("5");
        assert_eq!(a.received(), vec!["5"]);
    }

    #[test]
    fn test_unsubscribe_first_observer() {
        let log = journal();
        let a = Recorder::new("a", &log);
        let b = Recorder::new("b", &log);
        let c = Recorder::new("c", &log);
        let subject = Subject::new("station");

        subject.subscribe(as_dyn(&a));
        subject.subscribe(as_dyn(&b));
        subject.subscribe(as_dyn(&c));

        assert_eq!(
            subject.unsubscribe(&as_dyn(&a)),
            UnsubscribeOutcome::Removed { position: 0 }
        );
        subject.update_state("x");

        assert!(a.received().is_empty());
        assert_eq!(*log.lock(), vec!["b:x", "c:x"]);
        assert_eq!(subject.observer_names(), vec!["b", "c"]);
    }

    #[test]
    fn test_unsubscribe_absent_is_noop() {
        let log = journal();
        let a = Recorder::new("a", &log);
        let b = Recorder::new("b", &log);
        let c = Recorder::new("c", &log);
        let d = Recorder::new("d", &log);
        let subject = Subject::new("station");

        subject.subscribe(as_dyn(&a));
        subject.subscribe(as_dyn(&b));
        subject.subscribe(as_dyn(&c));

        let outcome = subject.unsubscribe(&as_dyn(&d));
        assert!(!outcome.is_removed());
        assert_eq!(subject.observer_names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_same_type_instances_are_distinct() {
        let log = journal();
        let first = Recorder::new("twin", &log);
        let second = Recorder::new("twin", &log);
        let subject = Subject::new("station");

        assert!(subject.subscribe(as_dyn(&first)).is_added());
        assert!(subject.subscribe(as_dyn(&second)).is_added());
        assert_eq!(subject.observer_count(), 2);
    }

    #[test]
    fn test_notification_order_matches_registration() {
        let log = journal();
        let subject = Subject::new("station");
        let recorders: Vec<_> = (0..6)
            .map(|i| Recorder::new(&format!("o{}", i), &log))
            .collect();

        for recorder in &recorders {
            subject.subscribe(as_dyn(recorder));
        }
        subject.update_state("v");

        let expected: Vec<String> = (0..6).map(|i| format!("o{}:v", i)).collect();
        assert_eq!(*log.lock(), expected);
    }

    #[test]
    fn test_resubscribe_moves_to_end() {
        let log = journal();
        let a = Recorder::new("a", &log);
        let b = Recorder::new("b", &log);
        let subject = Subject::new("station");

        subject.subscribe(as_dyn(&a));
        subject.subscribe(as_dyn(&b));
        subject.unsubscribe(&as_dyn(&a));
        subject.subscribe(as_dyn(&a));

        assert_eq!(subject.observer_names(), vec!["b", "a"]);
    }

    #[test]
    fn test_state_value_integrity() {
        let log = journal();
        let a = Recorder::new("a", &log);
        let b = Recorder::new("b", &log);
        let subject = Subject::new("station");

        subject.subscribe(as_dyn(&a));
        subject.update_state("2");
        subject.subscribe(as_dyn(&b));
        subject.update_state("7");

        assert_eq!(subject.state(), "7");
        assert_eq!(a.received().last().map(String::as_str), Some("7"));
        assert_eq!(b.received().last().map(String::as_str), Some("7"));
        assert_eq!(subject.notification_count(), 2);
    }

    #[test]
    fn test_zero_observer_safety() {
        let subject = Subject::with_state("station", "1");
        subject.update_state("9");

        assert_eq!(subject.state(), "9");
        assert_eq!(subject.notification_count(), 1);
    }

    #[test]
    fn test_notify_does_not_change_state() {
        let log = journal();
        let a = Recorder::new("a", &log);
        let subject = Subject::new("station");
        subject.subscribe(as_dyn(&a));

        subject.notify("raw");

        assert_eq!(a.received(), vec!["raw"]);
        assert_eq!(subject.state(), "0");
    }

    #[test]
    fn test_outcome_into_result() {
        let dup = SubscribeOutcome::AlreadySubscribed {
            observer: "a".to_string(),
        };
        assert!(matches!(
            dup.into_result(),
            Err(Error::DuplicateSubscription(name)) if name == "a"
        ));

        let missing = UnsubscribeOutcome::NotSubscribed {
            observer: "d".to_string(),
        };
        assert!(matches!(
            missing.into_result(),
            Err(Error::UnknownObserver(name)) if name == "d"
        ));

        assert!(SubscribeOutcome::Added { position: 0 }.into_result().is_ok());
        assert!(UnsubscribeOutcome::Removed { position: 0 }
            .into_result()
            .is_ok());
    }

    /// 콜백 안에서 다른 옵저버를 해제하거나 등록하는 옵저버
    struct Meddler {
        subject: Weak<Subject>,
        remove: Mutex<Option<Arc<dyn Observer>>>,
        add: Mutex<Option<Arc<dyn Observer>>>,
    }

    impl Observer for Meddler {
        fn name(&self) -> &str {
            "meddler"
        }

        fn update(&self, _value: &str) {
            let Some(subject) = self.subject.upgrade() else {
                return;
            };
            if let Some(target) = self.remove.lock().take() {
                subject.unsubscribe(&target);
            }
            if let Some(newcomer) = self.add.lock().take() {
                subject.subscribe(newcomer);
            }
        }
    }

    #[test]
    fn test_reentrant_mutation_uses_snapshot() {
        let log = journal();
        let victim = Recorder::new("victim", &log);
        let newcomer = Recorder::new("newcomer", &log);
        let subject = Arc::new(Subject::new("station"));

        let meddler: Arc<dyn Observer> = Arc::new(Meddler {
            subject: Arc::downgrade(&subject),
            remove: Mutex::new(Some(as_dyn(&victim))),
            add: Mutex::new(Some(as_dyn(&newcomer))),
        });

        subject.subscribe(meddler);
        subject.subscribe(as_dyn(&victim));

        // 진행 중인 통지는 시작 시점 목록을 따름
        subject.update_state("1");
        assert_eq!(victim.received(), vec!["1"]);
        assert!(newcomer.received().is_empty());

        // 다음 통지부터 변경 반영
        subject.update_state("2");
        assert_eq!(victim.received(), vec!["1"]);
        assert_eq!(newcomer.received(), vec!["2"]);
        assert_eq!(subject.observer_names(), vec!["meddler", "newcomer"]);
    }

    #[test]
    fn test_concurrent_subscribers() {
        let log = journal();
        let subject = Arc::new(Subject::new("station"));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let subject = Arc::clone(&subject);
                let recorder = Recorder::new(&format!("t{}", i), &log);
                std::thread::spawn(move || {
                    subject.subscribe(as_dyn(&recorder));
                    subject.update_state(i.to_string());
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(subject.observer_count(), 8);
        assert_eq!(subject.notification_count(), 8);
    }
}
