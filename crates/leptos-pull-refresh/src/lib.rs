//! Leptos Pull-to-Refresh Utilities
//!
//! Gesture state for pull-to-refresh, owned by the scrolling view.
//! Touch handlers update the state; indicators only read it through
//! [`IndicatorLayout::compute`].

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Default pull distance (px) needed to trigger a refresh
pub const DEFAULT_THRESHOLD_PX: f64 = 80.0;

/// Finger travel is scaled by this factor into pull distance
const PULL_DAMPING: f64 = 0.5;

/// Pull distance never exceeds this multiple of the threshold
const MAX_PULL_FACTOR: f64 = 2.0;

/// Gesture state of a pull-to-refresh area
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PullToRefreshState {
    pub is_pulling: bool,
    pub pull_distance: f64,
    pub is_refreshing: bool,
    pub start_y: f64,
}

impl PullToRefreshState {
    /// Touch started at `y`. Pulling only begins when the content is
    /// scrolled to the top and no refresh is running.
    pub fn begin(&mut self, y: f64, at_top: bool) {
        if self.is_refreshing || !at_top {
            return;
        }
        self.is_pulling = true;
        self.start_y = y;
        self.pull_distance = 0.0;
    }

    /// Touch moved to `y`
    pub fn move_to(&mut self, y: f64, threshold: f64) {
        if !self.is_pulling {
            return;
        }
        let delta = y - self.start_y;
        self.pull_distance = if delta > 0.0 {
            (delta * PULL_DAMPING).min(threshold * MAX_PULL_FACTOR)
        } else {
            0.0
        };
    }

    /// Touch ended. Returns true when the pull crossed the threshold and a
    /// refresh should start.
    pub fn release(&mut self, threshold: f64) -> bool {
        if !self.is_pulling {
            return false;
        }
        let triggered = self.pull_distance >= threshold;
        self.is_pulling = false;
        self.pull_distance = 0.0;
        if triggered {
            self.is_refreshing = true;
        }
        triggered
    }

    /// Gesture taken over by the browser; drop the pull without refreshing
    pub fn cancel(&mut self) {
        self.is_pulling = false;
        self.pull_distance = 0.0;
    }

    /// Refresh work is done
    pub fn finish_refresh(&mut self) {
        self.is_refreshing = false;
        self.is_pulling = false;
        self.pull_distance = 0.0;
    }

    /// Pulled far enough that releasing would refresh
    pub fn is_armed(&self, threshold: f64) -> bool {
        self.is_pulling && self.pull_distance >= threshold
    }
}

/// Where and how visible the indicator is for a given state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorLayout {
    /// Vertical offset in px
    pub offset_px: f64,
    /// 0.0 ..= 1.0
    pub opacity: f64,
    pub show_spinner: bool,
}

impl IndicatorLayout {
    /// `None` means the indicator is hidden.
    ///
    /// While refreshing the indicator stays pinned at the threshold.
    pub fn compute(state: &PullToRefreshState, threshold: f64) -> Option<Self> {
        if state.pull_distance <= 0.0 && !state.is_refreshing {
            return None;
        }

        let distance = if state.is_refreshing {
            state.pull_distance.max(threshold)
        } else {
            state.pull_distance
        };
        let opacity = if threshold > 0.0 {
            (distance / threshold).min(1.0)
        } else {
            1.0
        };

        Some(Self {
            offset_px: distance,
            opacity,
            show_spinner: state.is_refreshing,
        })
    }
}

/// Pull state signals
#[derive(Clone, Copy)]
pub struct PullRefreshSignals {
    pub state_read: ReadSignal<PullToRefreshState>,
    pub state_write: WriteSignal<PullToRefreshState>,
    pub threshold: f64,
}

pub fn create_pull_refresh_signals(threshold: f64) -> PullRefreshSignals {
    let (state_read, state_write) = signal(PullToRefreshState::default());
    PullRefreshSignals {
        state_read,
        state_write,
        threshold,
    }
}

fn first_touch_y(ev: &web_sys::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|t| t.client_y() as f64)
}

/// Create touchstart handler for the scroll container
pub fn make_on_touchstart(prs: PullRefreshSignals) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        let Some(y) = first_touch_y(&ev) else { return };
        let at_top = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| el.scroll_top() <= 0)
            .unwrap_or(true);
        prs.state_write.update(|s| s.begin(y, at_top));
    }
}

/// Create touchmove handler
pub fn make_on_touchmove(prs: PullRefreshSignals) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if !prs.state_read.get_untracked().is_pulling {
            return;
        }
        if let Some(y) = first_touch_y(&ev) {
            prs.state_write.update(|s| s.move_to(y, prs.threshold));
        }
    }
}

/// Create touchend handler; runs `on_refresh` when the pull crossed the threshold
pub fn make_on_touchend(
    prs: PullRefreshSignals,
    on_refresh: Callback<()>,
) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |_ev: web_sys::TouchEvent| {
        let mut state = prs.state_read.get_untracked();
        let triggered = state.release(prs.threshold);
        prs.state_write.set(state);
        if triggered {
            on_refresh.run(());
        }
    }
}

/// Create touchcancel handler; never triggers a refresh
pub fn make_on_touchcancel(prs: PullRefreshSignals) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |_ev: web_sys::TouchEvent| {
        prs.state_write.update(|s| s.cancel());
    }
}

/// End refresh operation
pub fn finish_refresh(prs: &PullRefreshSignals) {
    prs.state_write.update(|s| s.finish_refresh());
}
