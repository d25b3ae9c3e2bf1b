use super::SubmissionKey;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// How long a form that went through stays refused.
const REMEMBER_COMPLETED_FOR: Duration = Duration::from_secs(30 * 60);

/// The submissions currently waiting on the backend, and the ones that recently went through,
/// shared by all workers.
///
/// It stops a double click (or an impatient refresh) from sending the same survey twice: while the
/// first attempt is pending, and for a while after it succeeded. A failed attempt releases the key
/// straight away, so a retry goes through.
#[derive(Debug)]
pub struct InFlightSubmissions {
    keys: Mutex<Keys>,
    remember_completed_for: Duration,
}

#[derive(Debug, Default)]
struct Keys {
    pending: HashSet<SubmissionKey>,
    completed: HashMap<SubmissionKey, Instant>,
}

/// What happened when we tried to start a submission.
#[derive(Debug)]
pub enum SubmissionAttempt<'a> {
    Started(InFlightGuard<'a>),
    /// Another request with the same key is still waiting on the backend.
    Pending,
    /// A request with the same key has already been stored by the backend.
    AlreadySubmitted,
}

impl Default for InFlightSubmissions {
    fn default() -> Self {
        Self::remembering_completed_for(REMEMBER_COMPLETED_FOR)
    }
}

impl InFlightSubmissions {
    pub fn remembering_completed_for(window: Duration) -> Self {
        Self {
            keys: Mutex::new(Keys::default()),
            remember_completed_for: window,
        }
    }

    pub fn try_begin(&self, key: SubmissionKey) -> SubmissionAttempt<'_> {
        let mut keys = self.lock();
        let window = self.remember_completed_for;
        keys.completed
            .retain(|_, completed_at| completed_at.elapsed() < window);

        if keys.completed.contains_key(&key) {
            return SubmissionAttempt::AlreadySubmitted;
        }
        if !keys.pending.insert(key) {
            return SubmissionAttempt::Pending;
        }
        SubmissionAttempt::Started(InFlightGuard {
            registry: self,
            key,
            completed: false,
        })
    }

    fn finish(&self, key: SubmissionKey, completed: bool) {
        let mut keys = self.lock();
        keys.pending.remove(&key);
        if completed {
            keys.completed.insert(key, Instant::now());
        }
    }

    fn lock(&self) -> MutexGuard<'_, Keys> {
        self.keys.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Releases the key when dropped, whichever way the submission ended.
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    registry: &'a InFlightSubmissions,
    key: SubmissionKey,
    completed: bool,
}

impl InFlightGuard<'_> {
    /// The backend stored the survey: later attempts with the same key are refused.
    pub fn complete(mut self) {
        self.completed = true;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.registry.finish(self.key, self.completed);
    }
}
