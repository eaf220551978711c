// src/render/gauge.rs
//! Animated score gauge: a counter ticking up to the score and a circular stroke
//! easing toward the matching offset. Both finish about two seconds after start.

use std::f64::consts::PI;
use std::time::Duration;
use tokio::time::{interval_at, sleep, Instant};
use tracing::debug;

use crate::flow::Cancellation;
use crate::view::{GaugeState, StrokeTransition, ViewState};

pub const GAUGE_RADIUS: f64 = 45.0;
pub const STROKE_DELAY: Duration = Duration::from_millis(500);
pub const ANIMATION_DURATION: Duration = Duration::from_secs(2);

pub fn circumference() -> f64 {
    2.0 * PI * GAUGE_RADIUS
}

/// Dash offset that leaves `score` percent of the circle drawn
pub fn target_offset(score: f64) -> f64 {
    let score = score.clamp(0.0, 100.0);
    circumference() * (1.0 - score / 100.0)
}

/// Highest whole number the counter shows; it never passes the score
pub fn counter_target(score: f64) -> u32 {
    if score.is_finite() && score >= 1.0 {
        score.min(100.0).floor() as u32
    } else {
        0
    }
}

/// Time between counter increments so the count takes `ANIMATION_DURATION` overall.
/// Scores below one never tick.
pub fn tick_period(score: f64) -> Option<Duration> {
    (counter_target(score) > 0)
        .then(|| Duration::from_secs_f64(ANIMATION_DURATION.as_secs_f64() / score))
}

pub async fn animate_score(view: &mut ViewState, score: f64, cancel: &Cancellation) {
    let full = circumference();
    view.gauge = GaugeState {
        circumference: full,
        dash_offset: full,
        transition: None,
    };
    view.score_display = "0".to_string();

    let target = counter_target(score);
    let period = tick_period(score).unwrap_or(ANIMATION_DURATION);
    let mut counting = target > 0;
    let mut stroke_pending = true;
    let mut current = 0u32;

    let mut ticker = interval_at(Instant::now() + period, period);
    let stroke = sleep(STROKE_DELAY);
    tokio::pin!(stroke);

    debug!("Animating score gauge to {} (tick every {:?})", score, period);

    while counting || stroke_pending {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("Score animation cancelled at {}", current);
                return;
            }
            _ = &mut stroke, if stroke_pending => {
                let offset = target_offset(score);
                view.gauge.transition = Some(StrokeTransition {
                    from: full,
                    to: offset,
                    duration: ANIMATION_DURATION,
                });
                view.gauge.dash_offset = offset;
                stroke_pending = false;
            }
            _ = ticker.tick(), if counting => {
                if current >= target {
                    counting = false;
                } else {
                    current += 1;
                    view.score_display = current.to_string();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert_eq!(target_offset(100.0), 0.0);
        assert_eq!(target_offset(0.0), circumference());
        assert!((target_offset(25.0) - circumference() * 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_tick_period_spans_two_seconds() {
        assert_eq!(tick_period(100.0), Some(Duration::from_millis(20)));
        assert_eq!(tick_period(1.0), Some(Duration::from_secs(2)));
        assert_eq!(tick_period(0.0), None);
        assert_eq!(tick_period(-5.0), None);
        assert_eq!(tick_period(0.4), None);
        assert_eq!(tick_period(1e-20), None);
    }

    #[test]
    fn test_counter_target_never_passes_score() {
        assert_eq!(counter_target(85.6), 85);
        assert_eq!(counter_target(0.99), 0);
        assert_eq!(counter_target(100.0), 100);
        assert_eq!(counter_target(f64::NAN), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_vanishing_score_shows_zero() {
        let result = crate::types::AnalysisResult::from_json(r#"{"role":"r","score":1e-20}"#).unwrap();
        let mut view = ViewState::new();
        animate_score(&mut view, result.score, &Cancellation::new()).await;

        assert_eq!(view.score_display, "0");
        assert!(view.gauge.transition.is_some());
        assert!((view.gauge.dash_offset - circumference()).abs() < 1e-9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_counter_lands_exactly_on_score() {
        for (score, shown) in [(1.0, "1"), (7.0, "7"), (59.0, "59"), (85.6, "85"), (99.9, "99"), (100.0, "100")] {
            let mut view = ViewState::new();
            let start = Instant::now();
            animate_score(&mut view, score, &Cancellation::new()).await;

            assert_eq!(view.score_display, shown);
            assert!((view.gauge.dash_offset - circumference() * (1.0 - score / 100.0)).abs() < 1e-9);
            let period = tick_period(score).unwrap();
            assert!(start.elapsed() <= ANIMATION_DURATION + period * 2);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stroke_transition_starts_after_delay() {
        let mut view = ViewState::new();
        animate_score(&mut view, 40.0, &Cancellation::new()).await;

        let gauge = &view.gauge;
        let transition = gauge.transition.as_ref().unwrap();
        assert_eq!(transition.from, circumference());
        assert_eq!(transition.duration, ANIMATION_DURATION);
        assert_eq!(gauge.painted_offset(ANIMATION_DURATION), target_offset(40.0));
        assert_eq!(gauge.dash_array(), format!("{} {}", circumference(), circumference()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_score_needs_no_timer() {
        let mut view = ViewState::new();
        let start = Instant::now();
        animate_score(&mut view, 0.0, &Cancellation::new()).await;

        assert_eq!(view.score_display, "0");
        assert_eq!(view.gauge.dash_offset, circumference());
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_counter_early() {
        let cancel = Cancellation::new();
        cancel.cancel();
        let mut view = ViewState::new();
        animate_score(&mut view, 90.0, &cancel).await;
        assert_eq!(view.score_display, "0");
        assert!(view.gauge.transition.is_none());
    }
}
