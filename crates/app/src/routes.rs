//! Declarative route table.
//!
//! A static ordered list of path-to-view bindings with per-route
//! metadata. Views materialise lazily: nothing is built until a route is
//! first visited, and the result is cached for the lifetime of the
//! table. The `requires_auth` flag is carried for every route but not
//! yet enforced by any guard.

use std::sync::OnceLock;

/// A page component identifier resolved by the embedding UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    pub component: &'static str,
}

/// One path-to-view binding.
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    /// Whether the route should sit behind authentication once a guard
    /// exists.
    pub requires_auth: bool,
    /// Name of the enclosing layout route, if any.
    pub parent: Option<&'static str>,
    loader: fn() -> View,
    view: OnceLock<View>,
}

impl Route {
    const fn new(
        path: &'static str,
        name: &'static str,
        requires_auth: bool,
        parent: Option<&'static str>,
        loader: fn() -> View,
    ) -> Self {
        Self {
            path,
            name,
            requires_auth,
            parent,
            loader,
            view: OnceLock::new(),
        }
    }

    /// The route's view, materialising it on first access.
    pub fn view(&self) -> &View {
        self.view.get_or_init(self.loader)
    }

    /// Whether the view has been materialised yet.
    pub fn is_loaded(&self) -> bool {
        self.view.get().is_some()
    }
}

/// The application's static route table, in declaration order.
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build the Autodocs route table: the `home` layout plus its child
    /// pages.
    pub fn app_routes() -> Self {
        let routes = vec![
            Route::new("/", "home", false, None, || View {
                component: "HomeLayout",
            }),
            Route::new("/dashboard", "dashboard", false, Some("home"), || View {
                component: "Dashboard",
            }),
            Route::new("/requests", "requests", false, Some("home"), || View {
                component: "Requests",
            }),
            Route::new("/documents", "documents", false, Some("home"), || View {
                component: "Documents",
            }),
            Route::new("/templates", "templates", false, Some("home"), || View {
                component: "Templates",
            }),
            Route::new("/users", "users", false, Some("home"), || View {
                component: "Users",
            }),
            Route::new("/settings", "settings", false, Some("home"), || View {
                component: "Settings",
            }),
        ];
        Self { routes }
    }

    /// All routes, in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find a route by exact path.
    pub fn find(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.path == path)
    }
}

// ---------------------------------------------------------------------------
// Scroll restoration
// ---------------------------------------------------------------------------

/// A remembered viewport offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    pub left: f64,
    pub top: f64,
}

/// What the UI should do with the viewport after navigating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollBehavior {
    /// Jump back to the remembered position.
    Restore(ScrollPosition),
    /// Scroll smoothly to the top.
    TopSmooth,
}

/// Restore the remembered position when navigation has one, otherwise
/// scroll smoothly to the top.
pub fn resolve_scroll(saved: Option<ScrollPosition>) -> ScrollBehavior {
    match saved {
        Some(position) => ScrollBehavior::Restore(position),
        None => ScrollBehavior::TopSmooth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- route table ---------------------------------------------------------

    #[test]
    fn all_pages_resolve() {
        let table = RouteTable::app_routes();
        for path in [
            "/",
            "/dashboard",
            "/requests",
            "/documents",
            "/templates",
            "/users",
            "/settings",
        ] {
            assert!(table.find(path).is_some(), "missing route for {path}");
        }
    }

    #[test]
    fn unknown_path_does_not_resolve() {
        let table = RouteTable::app_routes();
        assert!(table.find("/nope").is_none());
    }

    #[test]
    fn children_hang_off_home_layout() {
        let table = RouteTable::app_routes();
        let documents = table.find("/documents").unwrap();
        assert_eq!(documents.parent, Some("home"));
        assert_eq!(documents.name, "documents");
        assert!(!documents.requires_auth);
    }

    // -- lazy views ----------------------------------------------------------

    #[test]
    fn views_materialise_on_first_access_only() {
        let table = RouteTable::app_routes();
        let route = table.find("/templates").unwrap();

        assert!(!route.is_loaded());
        assert_eq!(route.view().component, "Templates");
        assert!(route.is_loaded());

        // Cached: the same instance comes back.
        assert!(std::ptr::eq(route.view(), route.view()));
    }

    // -- scroll restoration --------------------------------------------------

    #[test]
    fn saved_position_wins() {
        let saved = ScrollPosition {
            left: 0.0,
            top: 420.0,
        };
        assert_eq!(resolve_scroll(Some(saved)), ScrollBehavior::Restore(saved));
    }

    #[test]
    fn no_saved_position_scrolls_to_top() {
        assert_eq!(resolve_scroll(None), ScrollBehavior::TopSmooth);
    }
}
