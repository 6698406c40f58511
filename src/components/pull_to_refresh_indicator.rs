//! Pull-to-Refresh Indicator Component
//!
//! Presentational overlay for a pull gesture. The owning view keeps the
//! gesture state; this component only reads it.

use leptos::prelude::*;
use leptos_pull_refresh::{IndicatorLayout, PullToRefreshState, DEFAULT_THRESHOLD_PX};

/// Inline style for a computed layout
pub fn indicator_style(layout: &IndicatorLayout) -> String {
    format!(
        "transform: translateY({:.0}px); opacity: {:.2};",
        layout.offset_px, layout.opacity
    )
}

#[component]
pub fn PullToRefreshIndicator(
    /// Gesture state owned by the parent view
    #[prop(into)] state: Signal<PullToRefreshState>,
    /// Status text chosen by the parent
    #[prop(into)] label: Signal<String>,
    /// Pull distance at which the indicator is fully visible
    #[prop(optional)] threshold: Option<f64>,
) -> impl IntoView {
    let threshold = threshold.unwrap_or(DEFAULT_THRESHOLD_PX);
    let layout = Memo::new(move |_| IndicatorLayout::compute(&state.get(), threshold));

    move || {
        layout.get().map(|layout| {
            view! {
                <div class="pull-refresh-indicator" style=indicator_style(&layout)>
                    <Show when=move || layout.show_spinner>
                        <span class="pull-refresh-spinner"></span>
                    </Show>
                    <span class="pull-refresh-label">{move || label.get()}</span>
                </div>
            }
        })
    }
}
