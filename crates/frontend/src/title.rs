//! Document title handling.

use crate::app::Route;

/// Application display name; also the bare title on the home route.
pub const APP_NAME: &str = "matlog";

/// Format the document title for a route.
pub fn page_title(route: &Route) -> String {
    let page = match route {
        Route::Home => return APP_NAME.to_string(),
        Route::Sessions => "Sessions",
        Route::SessionDetail { .. } => "Session",
        Route::Timer => "Round Timer",
        Route::NotFound => "Not Found",
    };
    format!("{page} · {APP_NAME}")
}

/// Write the title for a route to `document.title`.
///
/// Without a document the title is left as-is, falling back to whatever
/// the page shell set.
pub fn apply_title(route: &Route) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&page_title(route));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_title_is_bare_app_name() {
        assert_eq!(page_title(&Route::Home), "matlog");
    }

    #[test]
    fn test_subpage_titles_carry_app_name() {
        assert_eq!(page_title(&Route::Sessions), "Sessions · matlog");
        assert_eq!(page_title(&Route::Timer), "Round Timer · matlog");
        assert_eq!(
            page_title(&Route::SessionDetail {
                id: "s_001".to_string()
            }),
            "Session · matlog"
        );
        assert_eq!(page_title(&Route::NotFound), "Not Found · matlog");
    }
}
