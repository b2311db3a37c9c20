//! Session detail page component.

use yew::prelude::*;

use crate::data::demo_sessions;

/// Properties for SessionDetailPage.
#[derive(Properties, PartialEq)]
pub struct SessionDetailPageProps {
    pub session_id: String,
}

/// Session detail page component.
#[function_component(SessionDetailPage)]
pub fn session_detail_page(props: &SessionDetailPageProps) -> Html {
    let session = demo_sessions()
        .into_iter()
        .find(|s| s.id == props.session_id);

    let Some(session) = session else {
        return html! {
            <div class="card">
                <h1>{"Session Not Found"}</h1>
                <p>{"The requested session could not be found."}</p>
            </div>
        };
    };

    html! {
        <div>
            <div class="card">
                <div class="card-header">
                    <h1 class="card-title">
                        { session.started_at.format("%A %e %B %Y").to_string() }
                    </h1>
                    <span class="session-kind">{ session.kind.label() }</span>
                </div>
                <p class="text-secondary">
                    { format!(
                        "{} minutes on the mat · {} sparring rounds",
                        session.duration_mins, session.rounds_sparred
                    )}
                </p>
            </div>

            if !session.techniques.is_empty() {
                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">{"Techniques"}</h2>
                    </div>
                    <ul class="technique-list">
                        { for session.techniques.iter().map(|t| html! {
                            <li>{ t }</li>
                        })}
                    </ul>
                </div>
            }

            if let Some(notes) = &session.notes {
                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">{"Notes"}</h2>
                    </div>
                    <p>{ notes }</p>
                </div>
            }
        </div>
    }
}
