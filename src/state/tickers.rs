// Recurring jobs behind the page: tween sampling, ambient drift, countdown

use crate::model::{AppAction, AppState, Trend};
use crate::util::{rand_between, rand_index};
use gloo_timers::callback::Interval;
use yew::UseReducerHandle;

pub const TWEEN_TICK_MS: u32 = 16;
pub const DRIFT_INTERVAL_MS: u32 = 5_000;
pub const COUNTDOWN_INTERVAL_MS: u32 = 1_000;

/// Owns every recurring interval on the page. Started once when the app
/// mounts; dropping it cancels all three timers as a unit.
pub struct Tickers {
    _tween: Interval,
    _drift: Interval,
    _countdown: Interval,
}

impl Tickers {
    pub fn start(state: UseReducerHandle<AppState>) -> Self {
        // The registry never grows or shrinks, so the slot range is fixed.
        let group_count = state.groups.len();
        let tween = {
            let state = state.clone();
            Interval::new(TWEEN_TICK_MS, move || {
                state.dispatch(AppAction::TweenTick {
                    dt_ms: TWEEN_TICK_MS as f64,
                });
            })
        };
        let drift = {
            let state = state.clone();
            Interval::new(DRIFT_INTERVAL_MS, move || {
                state.dispatch(AppAction::Drift {
                    slot: rand_index(group_count),
                    amount: rand_between(0, 1),
                    trend: Trend::ALL[rand_index(Trend::ALL.len())],
                });
            })
        };
        let countdown = Interval::new(COUNTDOWN_INTERVAL_MS, move || {
            state.dispatch(AppAction::CountdownTick);
        });
        Self {
            _tween: tween,
            _drift: drift,
            _countdown: countdown,
        }
    }
}
