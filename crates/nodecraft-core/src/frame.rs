use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Work performed once per display refresh.
pub trait FrameTask {
    fn frame(&mut self, dt: Duration);
}

/// Shared running flag for a frame loop. Cloning shares the flag.
#[derive(Clone, Debug)]
pub struct LoopHandle(Rc<Cell<bool>>);

impl Default for LoopHandle {
    fn default() -> Self {
        Self(Rc::new(Cell::new(true)))
    }
}

impl LoopHandle {
    #[inline]
    pub fn is_running(&self) -> bool {
        self.0.get()
    }

    #[inline]
    pub fn stop(&self) {
        self.0.set(false);
    }
}

/// Drives a [`FrameTask`] one refresh at a time.
///
/// The host calls [`FrameDriver::tick`] from its refresh callback and only
/// reschedules while it returns `true`.
pub struct FrameDriver<T> {
    task: T,
    handle: LoopHandle,
    last_instant: Option<Instant>,
    frames: u64,
}

impl<T: FrameTask> FrameDriver<T> {
    pub fn new(task: T, handle: LoopHandle) -> Self {
        Self {
            task,
            handle,
            last_instant: None,
            frames: 0,
        }
    }

    /// Run one frame with a measured `dt`. The first frame uses a zero `dt`.
    pub fn tick(&mut self) -> bool {
        let now = Instant::now();
        let dt = self
            .last_instant
            .map(|prev| now.duration_since(prev))
            .unwrap_or_default();
        self.last_instant = Some(now);
        self.tick_with(dt)
    }

    /// Run one frame with an explicit `dt`; a stopped loop does nothing.
    pub fn tick_with(&mut self, dt: Duration) -> bool {
        if !self.handle.is_running() {
            return false;
        }
        self.task.frame(dt);
        self.frames += 1;
        self.handle.is_running()
    }

    /// Run at most `n` frames of `dt` each; returns how many ran.
    pub fn run_ticks(&mut self, n: usize, dt: Duration) -> usize {
        let mut ran = 0;
        for _ in 0..n {
            if !self.handle.is_running() {
                break;
            }
            self.tick_with(dt);
            ran += 1;
        }
        ran
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn handle(&self) -> &LoopHandle {
        &self.handle
    }

    #[inline]
    pub fn task(&self) -> &T {
        &self.task
    }

    #[inline]
    pub fn task_mut(&mut self) -> &mut T {
        &mut self.task
    }

    pub fn into_task(self) -> T {
        self.task
    }
}
