// ============================================================================
// REDIRECT - Pending navigation intent, consumed once
// ============================================================================

/// Decide whether a pending redirect should fire. Returns the target when it
/// differs from the current path; the caller must emit exactly one navigation
/// and clear the pending value in the same step. A target equal to the
/// current path emits nothing and is left pending, which avoids redirect
/// loops.
pub fn resolve_redirect(pending: Option<&str>, current_path: &str) -> Option<String> {
    match pending {
        Some(target) if target != current_path => Some(target.to_owned()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_to_current_path_emits_nothing() {
        assert_eq!(resolve_redirect(Some("/console"), "/console"), None);
    }

    #[test]
    fn redirect_to_different_path_emits_target() {
        assert_eq!(
            resolve_redirect(Some("/console"), "/auth/login"),
            Some("/console".to_owned())
        );
    }

    #[test]
    fn no_pending_redirect_emits_nothing() {
        assert_eq!(resolve_redirect(None, "/"), None);
    }
}
