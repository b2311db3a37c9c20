//! Session log page component.

use core_types::{SessionKind, TrainingSession};
use yew::prelude::*;

use crate::components::SessionItem;
use crate::data::demo_sessions;

/// Session log page component.
#[function_component(SessionsPage)]
pub fn sessions_page() -> Html {
    let sessions = use_memo((), |_| {
        let mut sessions = demo_sessions();
        sessions.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        sessions
    });
    let search = use_state(String::new);
    let kind_filter = use_state(|| None::<SessionKind>);

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_kind_change = {
        let kind_filter = kind_filter.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            kind_filter.set(match select.value().as_str() {
                "gi" => Some(SessionKind::Gi),
                "no_gi" => Some(SessionKind::NoGi),
                "open_mat" => Some(SessionKind::OpenMat),
                "drilling" => Some(SessionKind::Drilling),
                "competition" => Some(SessionKind::Competition),
                "seminar" => Some(SessionKind::Seminar),
                _ => None,
            });
        })
    };

    // Filter by kind, then by search over techniques and notes
    let filtered: Vec<&TrainingSession> = sessions
        .iter()
        .filter(|s| match *kind_filter {
            Some(kind) => s.kind == kind,
            None => true,
        })
        .filter(|s| {
            if search.is_empty() {
                return true;
            }
            let needle = search.to_lowercase();
            s.techniques
                .iter()
                .any(|t| t.to_lowercase().contains(&needle))
                || s.notes
                    .as_ref()
                    .is_some_and(|n| n.to_lowercase().contains(&needle))
        })
        .collect();

    html! {
        <div>
            <h1>{"Sessions"}</h1>

            <div class="filter-bar">
                <select class="filter-select" onchange={on_kind_change}>
                    <option value="">{"All Kinds"}</option>
                    <option value="gi">{"Gi"}</option>
                    <option value="no_gi">{"No-Gi"}</option>
                    <option value="open_mat">{"Open Mat"}</option>
                    <option value="drilling">{"Drilling"}</option>
                    <option value="competition">{"Competition"}</option>
                    <option value="seminar">{"Seminar"}</option>
                </select>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search techniques and notes..."
                    oninput={on_search_input}
                />
            </div>

            if filtered.is_empty() {
                <div class="card">
                    <p>{"No sessions found."}</p>
                </div>
            } else {
                <div class="session-list">
                    { for filtered.iter().map(|session| {
                        html! { <SessionItem session={(*session).clone()} /> }
                    })}
                </div>
            }
        </div>
    }
}
