//! Vertical swipe classification for the home screen and app drawer.
//!
//! A gesture is a pointer-down/pointer-up pair on the screen surface. Only the vertical
//! displacement matters; there is no velocity or density compensation.

/// Default swipe distance in logical pixels.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Classifier tuning.
pub struct GestureConfig {
    /// Displacement a swipe must strictly exceed to produce an intent.
    pub swipe_threshold_px: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Navigation intent recognized from a completed swipe.
pub enum GestureIntent {
    /// Upward swipe while the drawer is closed.
    OpenDrawer,
    /// Downward swipe while the drawer is open.
    CloseDrawer,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Pointer-down position awaiting its pointer-up.
pub struct GestureSample {
    /// Vertical coordinate of the pointer-down, if one is being tracked.
    pub start_y: Option<f64>,
}

/// Classifies a completed swipe from `start_y` to `end_y`.
///
/// `delta = start_y - end_y`, so upward movement is positive.
pub fn classify_swipe(
    config: GestureConfig,
    start_y: f64,
    end_y: f64,
    drawer_open: bool,
) -> Option<GestureIntent> {
    let delta = start_y - end_y;
    if delta > config.swipe_threshold_px && !drawer_open {
        Some(GestureIntent::OpenDrawer)
    } else if delta < -config.swipe_threshold_px && drawer_open {
        Some(GestureIntent::CloseDrawer)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Stateful classifier holding at most one in-flight sample.
pub struct GestureClassifier {
    /// Thresholds.
    pub config: GestureConfig,
    sample: GestureSample,
}

impl GestureClassifier {
    /// Creates a classifier with explicit tuning.
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            sample: GestureSample::default(),
        }
    }

    /// Records the start of a gesture, replacing any unfinished sample.
    pub fn pointer_down(&mut self, y: f64) {
        self.sample.start_y = Some(y);
    }

    /// Completes the gesture. The sample is cleared whether or not an intent is produced.
    pub fn pointer_up(&mut self, y: f64, drawer_open: bool) -> Option<GestureIntent> {
        let start_y = self.sample.start_y.take()?;
        classify_swipe(self.config, start_y, y, drawer_open)
    }

    /// Drops the in-flight sample.
    pub fn cancel(&mut self) {
        self.sample.start_y = None;
    }

    /// Whether a pointer-down is waiting for its pointer-up.
    pub fn is_tracking(&self) -> bool {
        self.sample.start_y.is_some()
    }

    /// Current sample.
    pub fn sample(&self) -> GestureSample {
        self.sample
    }
}
