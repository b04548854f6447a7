use std::sync::{Arc, Mutex};

pub const MAX_LOG_LINES: usize = 300;
/// Matching games shown per page in list view.
pub const PAGE_SIZE: usize = 10;

/// Thread-safe log buffer with a maximum capacity.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push(&self, msg: String) {
        let mut buf = self.inner.lock().unwrap();
        buf.push(msg);
        if buf.len() > MAX_LOG_LINES {
            buf.remove(0);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().unwrap().clone()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Which screen the dashboard is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Metric cards, charts, and the latest matching games.
    Dashboard,
    /// Paginated list of every matching game.
    List,
    /// Inning-by-inning breakdown of one selected game.
    Detail,
}
