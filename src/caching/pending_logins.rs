//! # 진행 중인 로그인 시도 저장소
//!
//! 인가 요청 리다이렉트부터 콜백까지 [`AuthFlow`]를 메모리에 보관합니다.
//! 브라우저에는 시도 ID(UUID)만 쿠키로 전달되고, state/nonce/PKCE verifier는
//! 서버 밖으로 나가지 않습니다.
//!
//! - 각 시도는 TTL(`OAUTH_LOGIN_TIMEOUT_MINUTES`, 기본 10분) 이후 만료됩니다.
//! - [`PendingLoginStore::take`]는 항목을 제거하며 꺼내므로 같은 콜백을 두 번 처리할 수 없습니다.
//! - 보관 개수는 상한(기본 [`MAX_PENDING_LOGINS`])을 넘지 않으며, 가득 차면 가장 오래된 시도를 버립니다.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::config::OAuthConfig;
use crate::services::auth::AuthFlow;

/// 로그인 시도 ID를 담는 쿠키 이름
pub const LOGIN_ATTEMPT_COOKIE: &str = "ssojet.login-attempt";

/// 동시에 보관하는 로그인 시도 수 상한
pub const MAX_PENDING_LOGINS: usize = 10_000;

pub struct PendingLoginStore {
    ttl: Duration,
    max_entries: usize,
    entries: Mutex<HashMap<Uuid, (Instant, AuthFlow)>>,
}

impl PendingLoginStore {
    pub fn new(ttl: Duration) -> Self {
        Self::with_max_entries(ttl, MAX_PENDING_LOGINS)
    }

    pub fn with_max_entries(ttl: Duration, max_entries: usize) -> Self {
        Self {
            ttl,
            max_entries: max_entries.max(1),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_env() -> Self {
        let minutes = OAuthConfig::login_timeout_minutes().max(1) as u64;
        Self::new(Duration::from_secs(minutes * 60))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// 시도를 저장하고 쿠키에 실을 ID를 반환합니다. 만료된 항목은 이때 정리됩니다.
    pub fn insert(&self, flow: AuthFlow) -> Uuid {
        let now = Instant::now();
        let mut entries = self.lock();

        let before = entries.len();
        entries.retain(|_, (created, _)| now.duration_since(*created) < self.ttl);
        if entries.len() < before {
            log::debug!("만료된 로그인 시도 {}건 정리", before - entries.len());
        }

        while entries.len() >= self.max_entries {
            let Some(oldest) = entries
                .iter()
                .min_by_key(|(_, (created, _))| *created)
                .map(|(id, _)| *id)
            else {
                break;
            };
            entries.remove(&oldest);
            log::warn!("로그인 시도 보관 한도({}) 초과로 가장 오래된 시도를 폐기합니다", self.max_entries);
        }

        let id = Uuid::new_v4();
        entries.insert(id, (now, flow));
        id
    }

    /// 시도를 꺼냅니다. 없거나 만료되었으면 `None`입니다.
    pub fn take(&self, id: &Uuid) -> Option<AuthFlow> {
        let (created, flow) = self.lock().remove(id)?;

        if created.elapsed() >= self.ttl {
            log::warn!("만료된 로그인 시도로 콜백이 들어왔습니다: {}", id);
            return None;
        }

        Some(flow)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, (Instant, AuthFlow)>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::NoopDiagnostics;
    use crate::services::auth::FlowStage;

    fn flow() -> AuthFlow {
        AuthFlow::new(Arc::new(NoopDiagnostics))
    }

    #[test]
    fn test_take_removes_attempt() {
        let store = PendingLoginStore::new(Duration::from_secs(60));
        let id = store.insert(flow());

        assert_eq!(store.len(), 1);
        assert_eq!(store.take(&id).map(|f| f.stage()), Some(FlowStage::Idle));
        assert!(store.take(&id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_id() {
        let store = PendingLoginStore::new(Duration::from_secs(60));
        assert!(store.take(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_insert_purges_expired_attempts() {
        let store = PendingLoginStore::new(Duration::from_millis(200));
        let stale = store.insert(flow());
        std::thread::sleep(Duration::from_millis(300));

        let fresh = store.insert(flow());
        assert_eq!(store.len(), 1);
        assert!(store.take(&stale).is_none());
        assert!(store.take(&fresh).is_some());
    }

    #[test]
    fn test_take_rejects_expired_attempt() {
        let store = PendingLoginStore::new(Duration::from_millis(20));
        let id = store.insert(flow());
        std::thread::sleep(Duration::from_millis(40));

        assert_eq!(store.len(), 1);
        assert!(store.take(&id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_full_store_drops_oldest_attempt() {
        let store = PendingLoginStore::with_max_entries(Duration::from_secs(60), 2);
        let first = store.insert(flow());
        std::thread::sleep(Duration::from_millis(2));
        let second = store.insert(flow());
        std::thread::sleep(Duration::from_millis(2));
        let third = store.insert(flow());

        assert_eq!(store.len(), 2);
        assert!(store.take(&first).is_none());
        assert!(store.take(&second).is_some());
        assert!(store.take(&third).is_some());
    }

    #[test]
    fn test_ids_are_distinct() {
        let store = PendingLoginStore::new(Duration::from_secs(60));
        assert_ne!(store.insert(flow()), store.insert(flow()));
    }
}
