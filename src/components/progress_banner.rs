//! Spend-progress banner shown at the top of the dashboard.

#[cfg(test)]
#[path = "progress_banner_test.rs"]
mod progress_banner_test;

use leptos::prelude::*;

use crate::net::types::SpendProgress;
use crate::util::format::format_points;

/// Clamp a reported percentage into the renderable 0-100 range.
/// Non-finite values render as zero progress.
pub fn clamp_percent(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Progress message plus a fill bar toward the top reward.
#[component]
pub fn ProgressBanner(progress: SpendProgress) -> impl IntoView {
    let percent = progress.progress_percent.map(clamp_percent);
    let points_line = match (progress.current_points, progress.target_points) {
        (Some(current), Some(target)) => {
            Some(format!("Current: {} points | Goal: {} points", format_points(current), format_points(target)))
        }
        _ => None,
    };

    view! {
        <div class="progress-banner">
            <p class="progress-banner__message">{progress.message}</p>
            {percent.map(|pct| {
                view! {
                    <div class="progress-banner__track">
                        <div class="progress-banner__fill" style:width=format!("{pct:.0}%")>
                            {format!("{pct:.0}%")}
                        </div>
                    </div>
                }
            })}
            {points_line.map(|line| view! { <p class="progress-banner__points">{line}</p> })}
        </div>
    }
}
