//! Session list item component.

use core_types::TrainingSession;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Properties for SessionItem component.
#[derive(Properties, PartialEq)]
pub struct SessionItemProps {
    pub session: TrainingSession,
}

/// Session list item component.
#[function_component(SessionItem)]
pub fn session_item(props: &SessionItemProps) -> Html {
    let session = &props.session;

    html! {
        <Link<Route> to={Route::SessionDetail { id: session.id.clone() }}>
            <div class="session-item">
                <div class="session-info">
                    <div class="session-date">
                        { session.started_at.format("%a %e %b").to_string() }
                    </div>
                    <div class="session-summary">
                        { format!("{} min · {} rounds", session.duration_mins, session.rounds_sparred) }
                    </div>
                </div>
                <div class="session-kind">{ session.kind.label() }</div>
            </div>
        </Link<Route>>
    }
}
