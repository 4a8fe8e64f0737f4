use wasm_bindgen::JsValue;
use web_sys::window;

/// Top-level route families. Console, docs and legal match whole subtrees;
/// the slug extractor reads the rest of the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    AuthLogin,
    AuthSignup,
    AuthLogout,
    Console,
    Docs,
    Legal,
    Repo,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        match segments.next() {
            None => Route::Home,
            Some("auth") => match segments.next() {
                Some("login") => Route::AuthLogin,
                Some("signup") => Route::AuthSignup,
                Some("logout") => Route::AuthLogout,
                _ => Route::NotFound,
            },
            Some("console") => Route::Console,
            Some("docs") => Route::Docs,
            Some("legal") => Route::Legal,
            Some("repo") => Route::Repo,
            Some(_) => Route::NotFound,
        }
    }

    /// Base page title; the console page appends the project slug.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Perf Console",
            Route::AuthLogin => "Log in | Perf Console",
            Route::AuthSignup => "Sign up | Perf Console",
            Route::AuthLogout => "Log out | Perf Console",
            Route::Console => "Console | Perf Console",
            Route::Docs => "Docs | Perf Console",
            Route::Legal => "Legal | Perf Console",
            Route::Repo => "Perf Console",
            Route::NotFound => "Not found | Perf Console",
        }
    }
}

/// Current `location.pathname`, `/` when unavailable.
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_owned())
}

/// Push a new history entry. The caller keeps its own path state in sync;
/// `pushState` does not fire `popstate`.
pub fn navigate(path: &str) {
    if let Some(win) = window() {
        if let Ok(history) = win.history() {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
                log::error!("❌ Error pushing history entry for {}: {:?}", path, e);
            }
        }
    }
}

/// Hard redirect out of the app, e.g. the `/repo` shortcut.
pub fn redirect_external(url: &str) {
    if let Some(win) = window() {
        if let Err(e) = win.location().set_href(url) {
            log::error!("❌ Error redirecting to {}: {:?}", url, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_route_family() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/auth/login"), Route::AuthLogin);
        assert_eq!(Route::from_path("/auth/signup"), Route::AuthSignup);
        assert_eq!(Route::from_path("/auth/logout"), Route::AuthLogout);
        assert_eq!(Route::from_path("/console"), Route::Console);
        assert_eq!(
            Route::from_path("/console/projects/boids/perf"),
            Route::Console
        );
        assert_eq!(Route::from_path("/docs/reference"), Route::Docs);
        assert_eq!(Route::from_path("/legal/terms"), Route::Legal);
        assert_eq!(Route::from_path("/repo"), Route::Repo);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
        assert_eq!(Route::from_path("/auth"), Route::NotFound);
        assert_eq!(Route::from_path("/auth/reset"), Route::NotFound);
    }
}
