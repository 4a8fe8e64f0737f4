/// API base URL.
/// Configured at compile time:
/// - Development: http://localhost:61016 (default)
/// - Production: via API_URL env var (see build.rs / .env)
pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "http://localhost:61016",
};

/// Public repository, target of the `/repo` shortcut route.
pub const REPO_URL: &str = "https://github.com/perf-console/perf-console";
