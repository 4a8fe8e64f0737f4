/// Anchor segment preceding an organization slug in console paths,
/// e.g. `/console/organizations/{slug}/...`.
pub const ORGANIZATION_ANCHOR: &str = "organizations";

/// Anchor segment preceding a project slug,
/// e.g. `/console/projects/{slug}/perf`.
pub const PROJECT_ANCHOR: &str = "projects";

/// Organization slug from the current path, `None` when the anchor segment
/// is absent or has nothing after it.
pub fn organization_slug(path: &str) -> Option<String> {
    segment_after(path, ORGANIZATION_ANCHOR).map(str::to_owned)
}

/// Project slug from the current path. Unlike the organization slug this
/// only seeds the project state; console pages keep a remembered value
/// across routes that do not carry one.
pub fn project_slug(path: &str) -> Option<String> {
    segment_after(path, PROJECT_ANCHOR).map(str::to_owned)
}

fn segment_after<'p>(path: &'p str, anchor: &str) -> Option<&'p str> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    while let Some(segment) = segments.next() {
        if segment == anchor {
            return segments.next();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_slug_from_console_path() {
        assert_eq!(
            organization_slug("/console/organizations/pixie-labs/projects"),
            Some("pixie-labs".to_owned())
        );
    }

    #[test]
    fn path_without_anchor_has_no_organization_slug() {
        assert_eq!(organization_slug("/console/projects/boids/perf"), None);
        assert_eq!(organization_slug("/"), None);
        assert_eq!(organization_slug("/docs/reference"), None);
    }

    #[test]
    fn anchor_with_nothing_after_it_has_no_slug() {
        assert_eq!(organization_slug("/console/organizations"), None);
        assert_eq!(organization_slug("/console/organizations/"), None);
    }

    #[test]
    fn project_slug_from_console_path() {
        assert_eq!(
            project_slug("/console/projects/boids/perf"),
            Some("boids".to_owned())
        );
        assert_eq!(project_slug("/console/organizations/pixie-labs"), None);
    }
}
