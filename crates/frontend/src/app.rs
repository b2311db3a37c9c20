//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::InstallBanner;
use crate::nav::menu_items;
use crate::pages::{HomePage, SessionDetailPage, SessionsPage, TimerPage};
use crate::title;

/// Application routes.
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sessions")]
    Sessions,
    #[at("/sessions/:id")]
    SessionDetail { id: String },
    #[at("/timer")]
    Timer,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Sessions => html! { <SessionsPage /> },
        Route::SessionDetail { id } => html! { <SessionDetailPage session_id={id} /> },
        Route::Timer => html! { <TimerPage /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <TitleSync />
            <div class="app-container">
                <Sidebar />
                <main class="main-content">
                    <Switch<Route> render={switch} />
                    <InstallBanner />
                </main>
            </div>
        </BrowserRouter>
    }
}

/// Keeps `document.title` in sync with the current route.
#[function_component(TitleSync)]
fn title_sync() -> Html {
    let route = use_route::<Route>();

    use_effect_with(route, |route| {
        if let Some(route) = route {
            title::apply_title(route);
        }
    });

    Html::default()
}

/// Sidebar navigation component.
#[function_component(Sidebar)]
fn sidebar() -> Html {
    html! {
        <aside class="sidebar">
            <Link<Route> to={Route::Home} classes="nav-brand">
                {title::APP_NAME}
            </Link<Route>>
            <nav>
                <ul class="nav-links">
                    { for menu_items().into_iter().map(|item| html! {
                        <li>
                            <Link<Route> to={item.route}>
                                {item.label}
                            </Link<Route>>
                        </li>
                    })}
                </ul>
            </nav>
        </aside>
    }
}
