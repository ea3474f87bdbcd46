use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// Running counters for one engine. Safe to share across threads.
#[derive(Debug, Default)]
pub struct Metrics {
    searches: AtomicUsize,
    shortcuts: AtomicUsize,
    iterations: AtomicUsize,
    expansions: AtomicUsize,
    plies: AtomicUsize,
}

impl Metrics {
    pub(crate) fn search(&self) {
        self.searches.fetch_add(1, Ordering::Relaxed);
    }
    pub(crate) fn shortcut(&self) {
        self.shortcuts.fetch_add(1, Ordering::Relaxed);
    }
    pub(crate) fn iteration(&self) {
        self.iterations.fetch_add(1, Ordering::Relaxed);
    }
    pub(crate) fn expansion(&self) {
        self.expansions.fetch_add(1, Ordering::Relaxed);
    }
    pub(crate) fn ply(&self) {
        self.plies.fetch_add(1, Ordering::Relaxed);
    }

    /// Decisions asked for, including shortcuts.
    pub fn searches(&self) -> usize {
        self.searches.load(Ordering::Relaxed)
    }
    /// Decisions answered without searching because only one move was legal.
    pub fn shortcuts(&self) -> usize {
        self.shortcuts.load(Ordering::Relaxed)
    }
    pub fn iterations(&self) -> usize {
        self.iterations.load(Ordering::Relaxed)
    }
    pub fn expansions(&self) -> usize {
        self.expansions.load(Ordering::Relaxed)
    }
    /// Random moves applied during playouts.
    pub fn plies(&self) -> usize {
        self.plies.load(Ordering::Relaxed)
    }
}

impl std::fmt::Display for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "searches {} shortcuts {} iterations {} expansions {} plies {}",
            self.searches(),
            self.shortcuts(),
            self.iterations(),
            self.expansions(),
            self.plies()
        )
    }
}
