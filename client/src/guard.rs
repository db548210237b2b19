//! Route protection: a restricted view activates only for a live session.
//! The decision is re-evaluated on every attempt because the fragment
//! changes across redirects.

use std::sync::Arc;

use crate::session::SessionManager;

/// Navigation side effect taken when activation is denied.
pub trait Navigator {
    fn to_entry(&self);
}

pub struct RouteGuard<N: Navigator> {
    session: Arc<SessionManager>,
    navigator: N,
}

impl<N: Navigator> RouteGuard<N> {
    pub fn new(session: Arc<SessionManager>, navigator: N) -> Self {
        Self { session, navigator }
    }

    /// Captures any token carried in `fragment`, then allows or denies.
    /// Denial redirects to the entry view; no error ever surfaces.
    pub fn can_activate(&self, fragment: Option<&str>) -> bool {
        if !self.session.capture_from_fragment(fragment) {
            self.navigator.to_entry();
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::{Navigator, RouteGuard};
    use crate::session::SessionManager;

    #[derive(Clone, Default)]
    struct RecordingNavigator {
        redirects: Arc<AtomicUsize>,
    }

    impl Navigator for RecordingNavigator {
        fn to_entry(&self) {
            self.redirects.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn guard(dir: &tempfile::TempDir) -> (RouteGuard<RecordingNavigator>, RecordingNavigator) {
        let session = Arc::new(SessionManager::load(dir.path().join("session.json")));
        let navigator = RecordingNavigator::default();

        (RouteGuard::new(session, navigator.clone()), navigator)
    }

    #[test]
    fn test_denies_and_redirects_without_session() {
        let dir = tempfile::tempdir().unwrap();
        let (guard, navigator) = guard(&dir);

        assert!(!guard.can_activate(None));
        assert_eq!(navigator.redirects.load(Ordering::SeqCst), 1);

        assert!(!guard.can_activate(Some("state=abc")));
        assert_eq!(navigator.redirects.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_allows_with_token_fragment() {
        let dir = tempfile::tempdir().unwrap();
        let (guard, navigator) = guard(&dir);

        assert!(guard.can_activate(Some("id_token=XYZ")));
        assert_eq!(navigator.redirects.load(Ordering::SeqCst), 0);

        // Later attempts without a fragment ride the captured session.
        assert!(guard.can_activate(None));
        assert_eq!(navigator.redirects.load(Ordering::SeqCst), 0);
    }
}
