use futures::lock::{Mutex, MutexGuard};
use std::sync::Arc;

use crate::auth::password::AdminCredentials;
use crate::db::LedgerStore;
use crate::model::employee::Directory;
use crate::utils::challenge_store::ChallengeStore;
use crate::utils::clock::Clock;
use crate::utils::login_signal::LoginSignal;
use crate::utils::notifier::Notifier;

/// Everything a request handler needs, owned by the server for its lifetime.
pub struct AppState {
    pub directory: Directory,
    pub challenges: ChallengeStore,
    pub ledger: LedgerStore,
    pub admin: AdminCredentials,
    pub notifier: Arc<dyn Notifier>,
    pub login_signal: Arc<dyn LoginSignal>,
    pub clock: Arc<dyn Clock>,
    submit_lock: Mutex<()>,
}

impl AppState {
    pub fn new(
        directory: Directory,
        ledger: LedgerStore,
        admin: AdminCredentials,
        notifier: Arc<dyn Notifier>,
        login_signal: Arc<dyn LoginSignal>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            directory,
            challenges: ChallengeStore::new(),
            ledger,
            admin,
            notifier,
            login_signal,
            clock,
            submit_lock: Mutex::new(()),
        }
    }

    /// Held while a code is checked and the ledger updated, so a code is
    /// consumed at most once and ledger writes do not interleave.
    pub async fn lock_submissions(&self) -> MutexGuard<'_, ()> {
        self.submit_lock.lock().await
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use crate::utils::clock::ManualClock;
    use crate::utils::login_signal::FixedLoginSignal;
    use crate::utils::notifier::RecordingNotifier;

    pub struct Harness {
        pub state: AppState,
        pub clock: Arc<ManualClock>,
        pub mail: Arc<RecordingNotifier>,
        pub dir: tempfile::TempDir,
    }

    /// State over the built-in roster, a temp data dir and a clock pinned
    /// to Monday 2025-11-03 18:15:00.
    pub fn harness(login_name: &str) -> Harness {
        harness_with_mail(login_name, RecordingNotifier::default())
    }

    pub fn harness_with_mail(login_name: &str, mail: RecordingNotifier) -> Harness {
        let dir = tempfile::tempdir().unwrap();
        let clock = Arc::new(ManualClock::at(2025, 11, 3, 18, 15, 0));
        let mail = Arc::new(mail);

        let state = AppState::new(
            Directory::builtin(),
            LedgerStore::new(dir.path()),
            AdminCredentials::new("admin", "letmein").unwrap(),
            mail.clone(),
            Arc::new(FixedLoginSignal(login_name.to_string())),
            clock.clone(),
        );

        Harness {
            state,
            clock,
            mail,
            dir,
        }
    }
}
