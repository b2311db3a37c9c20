//! Home page component with the dashboard widgets.

use chrono::Utc;
use core_types::summarize;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{SessionItem, StatCard};
use crate::data::demo_sessions;
use crate::nav::quick_actions;

/// Home page component.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let sessions = use_memo((), |_| {
        let mut sessions = demo_sessions();
        sessions.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        sessions
    });
    let stats = summarize(&sessions, Utc::now());

    let recent = sessions.iter().take(5);

    html! {
        <div>
            <h1>{"Training Overview"}</h1>
            <p class="text-secondary" style="margin-bottom: 2rem;">
                {"Your mat time at a glance"}
            </p>

            <div class="stats-grid">
                <StatCard
                    value={stats.total_sessions.to_string()}
                    label={"Sessions Logged"}
                />
                <StatCard
                    value={format!("{:.1} h", f64::from(stats.total_mat_minutes) / 60.0)}
                    label={"Total Mat Time"}
                    sub={format!("avg {:.0} min", stats.avg_session_mins)}
                />
                <StatCard
                    value={stats.sessions_this_week.to_string()}
                    label={"This Week"}
                />
                <StatCard
                    value={stats.current_streak_days.to_string()}
                    label={"Day Streak"}
                    sub={format!("{} rounds sparred", stats.rounds_sparred)}
                />
            </div>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Quick Actions"}</h2>
                </div>
                <div style="display: flex; gap: 1rem;">
                    { for quick_actions().into_iter().enumerate().map(|(i, action)| {
                        let classes = if i == 0 { "btn btn-primary" } else { "btn btn-secondary" };
                        html! {
                            <Link<Route> to={action.route} classes={classes}>
                                {action.label}
                            </Link<Route>>
                        }
                    })}
                </div>
            </div>

            if !stats.kind_breakdown.is_empty() {
                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">{"Session Breakdown"}</h2>
                    </div>
                    <div class="session-list">
                        { for stats.kind_breakdown.iter().map(|k| html! {
                            <div class="session-item" style="cursor: default;">
                                <div class="session-info">
                                    <div class="session-date">{ k.kind.label() }</div>
                                    <div class="session-summary">
                                        { format!("{} sessions", k.count) }
                                    </div>
                                </div>
                                <div class="session-kind">
                                    { format!("{} min", k.minutes) }
                                </div>
                            </div>
                        })}
                    </div>
                </div>
            }

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Recent Sessions"}</h2>
                </div>
                <div class="session-list">
                    { for recent.map(|session| {
                        html! { <SessionItem session={session.clone()} /> }
                    })}
                </div>
            </div>
        </div>
    }
}
