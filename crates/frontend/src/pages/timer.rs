//! Round timer page component.
//!
//! A standard sparring clock: five-minute rounds with a one-minute
//! rest. While the clock runs the screen wake lock is held so the
//! display stays on between rounds.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use pwa::WakeLockManager;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::platform::wake_lock::BrowserWakeLock;

/// Round length in seconds.
const ROUND_SECS: u32 = 5 * 60;
/// Rest between rounds in seconds.
const REST_SECS: u32 = 60;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
    Round,
    Rest,
}

#[derive(Clone, Debug, PartialEq)]
struct TimerState {
    running: bool,
    phase: Phase,
    remaining_secs: u32,
    rounds_done: u32,
}

enum TimerAction {
    Start,
    Pause,
    Reset,
    Tick,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            running: false,
            phase: Phase::Round,
            remaining_secs: ROUND_SECS,
            rounds_done: 0,
        }
    }
}

impl Reducible for TimerState {
    type Action = TimerAction;

    fn reduce(self: Rc<Self>, action: TimerAction) -> Rc<Self> {
        match action {
            TimerAction::Start => Rc::new(Self {
                running: true,
                ..(*self).clone()
            }),
            TimerAction::Pause => Rc::new(Self {
                running: false,
                ..(*self).clone()
            }),
            TimerAction::Reset => Rc::new(Self::default()),
            TimerAction::Tick => {
                if !self.running {
                    return self;
                }
                if self.remaining_secs > 1 {
                    return Rc::new(Self {
                        remaining_secs: self.remaining_secs - 1,
                        ..(*self).clone()
                    });
                }
                match self.phase {
                    Phase::Round => Rc::new(Self {
                        phase: Phase::Rest,
                        remaining_secs: REST_SECS,
                        rounds_done: self.rounds_done + 1,
                        ..(*self).clone()
                    }),
                    Phase::Rest => Rc::new(Self {
                        phase: Phase::Round,
                        remaining_secs: ROUND_SECS,
                        ..(*self).clone()
                    }),
                }
            }
        }
    }
}

/// Format seconds as m:ss.
fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Round timer page component.
#[function_component(TimerPage)]
pub fn timer_page() -> Html {
    let manager = use_memo((), |_| WakeLockManager::new(BrowserWakeLock));
    let state = use_reducer(TimerState::default);
    let wake_active = use_state(|| false);

    // One-second tick for the lifetime of the page
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let interval = Interval::new(1_000, move || {
                dispatcher.dispatch(TimerAction::Tick);
            });
            move || drop(interval)
        });
    }

    // Drop the wake lock when the page goes away
    {
        let manager = manager.clone();
        use_effect_with((), move |_| {
            move || {
                spawn_local(async move {
                    manager.release().await;
                });
            }
        });
    }

    let on_start = {
        let state = state.clone();
        let manager = manager.clone();
        let wake_active = wake_active.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(TimerAction::Start);
            let manager = manager.clone();
            let wake_active = wake_active.clone();
            spawn_local(async move {
                manager.acquire().await;
                wake_active.set(manager.is_active());
            });
        })
    };

    let on_pause = {
        let state = state.clone();
        let manager = manager.clone();
        let wake_active = wake_active.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(TimerAction::Pause);
            let manager = manager.clone();
            let wake_active = wake_active.clone();
            spawn_local(async move {
                manager.release().await;
                wake_active.set(manager.is_active());
            });
        })
    };

    let on_reset = {
        let state = state.clone();
        let manager = manager.clone();
        let wake_active = wake_active.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(TimerAction::Reset);
            let manager = manager.clone();
            let wake_active = wake_active.clone();
            spawn_local(async move {
                manager.release().await;
                wake_active.set(manager.is_active());
            });
        })
    };

    let phase_label = match state.phase {
        Phase::Round => format!("Round {}", state.rounds_done + 1),
        Phase::Rest => "Rest".to_string(),
    };

    let wake_note = if !manager.is_supported() {
        "Wake lock is not supported in this browser; the screen may sleep."
    } else if *wake_active {
        "Screen will stay awake while the timer runs."
    } else {
        "Screen wake lock is idle."
    };

    html! {
        <div>
            <h1>{"Round Timer"}</h1>

            <div class="card timer-card">
                <div class="timer-phase">{ phase_label }</div>
                <div class="timer-display">{ format_clock(state.remaining_secs) }</div>
                <div class="timer-meta text-secondary">
                    { format!("{} rounds completed", state.rounds_done) }
                </div>

                <div class="timer-controls">
                    if state.running {
                        <button class="btn btn-secondary" onclick={on_pause}>{"Pause"}</button>
                    } else {
                        <button class="btn btn-primary" onclick={on_start}>{"Start"}</button>
                    }
                    <button class="btn btn-secondary" onclick={on_reset}>{"Reset"}</button>
                </div>
            </div>

            <p class="text-secondary">{ wake_note }</p>
        </div>
    }
}
