/// Events emitted while a puzzle is being generated.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    /// A fresh placement attempt started on an empty grid of this size.
    GridAttempt { rows: usize, cols: usize },

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional host callback.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Reports a message built lazily, skipping the allocation when nobody listens.
    #[inline]
    pub fn message(&self, build: impl FnOnce() -> String) {
        if let Some(cb) = &self.callback {
            cb(Progress::Message(build()));
        }
    }
}
