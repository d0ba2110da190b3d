/// Coarse progress events of a screening run, consumed by an optional
/// caller-supplied callback (the CLI wires them to a progress bar).
#[derive(Debug, Clone)]
pub enum Progress {
    Phase { name: &'static str },
    SweepStart { channels: u64 },
    SweepAdvance,
    SweepFinish,
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

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
}
