//! One headless tunnel app shared by every example of an rspec suite.
//!
//! rspec clones its environment per example and wants it `Send + Sync`.
//! The fixtures therefore hold a handle to a single mutex-guarded `App`,
//! and [`run_scenarios`] keeps the examples on one thread, in order, so
//! each `before_each` sees the state the previous example left behind.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use bevy::prelude::App;
use rspec::block::Suite;
use rspec::report::Report;
use rspec::{ConfigurationBuilder, Logger, Runner};

struct GuardedApp(App);

// SAFETY: the app is reachable only through `SharedApp::with`, which holds
// the mutex for the whole call, and `run_scenarios` disables parallel
// execution, so the app is never touched from two threads at once.
unsafe impl Send for GuardedApp {}

/// Cloneable handle to the suite's app.
#[derive(Clone)]
pub struct SharedApp(Arc<Mutex<GuardedApp>>);

impl fmt::Debug for SharedApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedApp").finish_non_exhaustive()
    }
}

impl SharedApp {
    /// Takes ownership of a primed app.
    pub fn new(app: App) -> Self {
        Self(Arc::new(Mutex::new(GuardedApp(app))))
    }

    /// Runs `f` with exclusive access to the app. A poisoned lock from an
    /// earlier failed example is recovered so later examples still run.
    pub fn with<R>(&self, f: impl FnOnce(&mut App) -> R) -> R {
        let mut guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard.0)
    }
}

/// Runs a suite serially and fails the calling test if any example failed.
pub fn run_scenarios<T>(suite: &Suite<T>)
where
    T: Clone + Send + Sync + fmt::Debug,
{
    let logger = Arc::new(Logger::new(std::io::stdout()));
    let config = ConfigurationBuilder::default()
        .parallel(false)
        .exit_on_failure(false)
        .build()
        .unwrap_or_else(|e| panic!("rspec configuration failed: {e}"));
    let report = Runner::new(config, vec![logger]).run(suite);
    assert!(
        report.is_success(),
        "{} of {} scenarios failed",
        report.get_failed(),
        report.get_failed() + report.get_passed()
    );
}
