//! # Route Table & Router
//!
//! Declarative mapping from URL-style paths to screens, kept separate from
//! the widgets that render them. A route node pairs a path with the screen
//! it mounts; children nest inside their parent's screen, so resolving a
//! path yields the whole chain — enclosing layouts first, leaf last — and
//! the renderer draws them inside-out.
//!
//! Matching is segment-exact and trailing-slash-insensitive. An index child
//! (path `""`) matches its parent's own path. A path matching nothing
//! resolves to `None`; what to render then is the caller's problem.

/// Screens the router can mount. Rendering lives in `tui::ui`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Shared chrome wrapping every routed screen.
    AppLayout,
    /// The project listing.
    ProjectList,
}

/// One node of the route table.
pub struct RouteDef {
    pub path: &'static str,
    pub screen: Screen,
    pub children: &'static [RouteDef],
}

/// The application route table: `/projects` mounts the layout, its index
/// child mounts the listing inside it.
pub const ROUTES: &[RouteDef] = &[RouteDef {
    path: "/projects",
    screen: Screen::AppLayout,
    children: &[RouteDef {
        path: "",
        screen: Screen::ProjectList,
        children: &[],
    }],
}];

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn match_nodes(routes: &'static [RouteDef], rest: &[&str], chain: &mut Vec<Screen>) -> bool {
    for route in routes {
        let own = split_segments(route.path);

        if own.is_empty() {
            // Index route: matches only when the path is fully consumed.
            if rest.is_empty() {
                chain.push(route.screen);
                return true;
            }
            continue;
        }

        let is_prefix =
            rest.len() >= own.len() && own.iter().zip(rest.iter()).all(|(a, b)| a == b);
        if !is_prefix {
            continue;
        }

        chain.push(route.screen);
        let remainder = &rest[own.len()..];

        if remainder.is_empty() {
            // This node is a match; descend once more for an index child.
            match_nodes(route.children, remainder, chain);
            return true;
        }
        if match_nodes(route.children, remainder, chain) {
            return true;
        }
        chain.pop();
    }
    false
}

/// Resolves `path` against the application route table.
pub fn resolve(path: &str) -> Option<Vec<Screen>> {
    resolve_in(ROUTES, path)
}

/// Resolves `path` against an arbitrary table. Returns the matched screen
/// chain (layouts first, leaf last) of the deepest matching node.
pub fn resolve_in(routes: &'static [RouteDef], path: &str) -> Option<Vec<Screen>> {
    let segments = split_segments(path);
    let mut chain = Vec::new();
    if match_nodes(routes, &segments, &mut chain) {
        Some(chain)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_resolves_to_layout_and_listing() {
        assert_eq!(
            resolve("/projects"),
            Some(vec![Screen::AppLayout, Screen::ProjectList])
        );
    }

    #[test]
    fn test_trailing_slash_is_equivalent() {
        assert_eq!(resolve("/projects/"), resolve("/projects"));
    }

    #[test]
    fn test_unknown_path_matches_nothing() {
        assert_eq!(resolve("/unknown"), None);
        assert_eq!(resolve("/"), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn test_deeper_path_than_table_matches_nothing() {
        assert_eq!(resolve("/projects/42"), None);
    }

    #[test]
    fn test_nested_table_resolves_deepest_match() {
        static NESTED: &[RouteDef] = &[RouteDef {
            path: "/a",
            screen: Screen::AppLayout,
            children: &[
                RouteDef {
                    path: "",
                    screen: Screen::ProjectList,
                    children: &[],
                },
                RouteDef {
                    path: "b/c",
                    screen: Screen::ProjectList,
                    children: &[],
                },
            ],
        }];
        assert_eq!(
            resolve_in(NESTED, "/a/b/c"),
            Some(vec![Screen::AppLayout, Screen::ProjectList])
        );
        assert_eq!(
            resolve_in(NESTED, "/a"),
            Some(vec![Screen::AppLayout, Screen::ProjectList])
        );
        assert_eq!(resolve_in(NESTED, "/a/b"), None);
    }

    #[test]
    fn test_layout_without_index_child_still_matches() {
        static BARE: &[RouteDef] = &[RouteDef {
            path: "/solo",
            screen: Screen::AppLayout,
            children: &[],
        }];
        assert_eq!(resolve_in(BARE, "/solo"), Some(vec![Screen::AppLayout]));
    }
}
