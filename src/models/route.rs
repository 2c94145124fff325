//! Hash-based routing between the overview and mounted modules.

use hvy_core::models::{ModuleId, MountTarget};

use crate::utils::dom;

/// Application routes.
///
/// URL format: `#/` for the overview, `#/<module>` for a module
/// (e.g. `#/projects`, `#/system_commands`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// System overview: `#/` or empty hash.
    Home,
    /// A mounted module.
    Module(ModuleId),
}

impl Route {
    /// Parse a URL hash into a Route. Unknown modules fall back to Home.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        if path.is_empty() {
            return Self::Home;
        }

        path.parse().map_or(Self::Home, Self::Module)
    }

    /// Convert Route to URL hash.
    pub fn to_hash(self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Module(id) => format!("#/{}", id.dir_name()),
        }
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    /// Update the browser URL to this route without a history entry.
    pub fn replace(self) {
        if Self::current() != self {
            dom::replace_hash(&self.to_hash());
        }
    }

    pub fn module(self) -> Option<ModuleId> {
        match self {
            Self::Home => None,
            Self::Module(id) => Some(id),
        }
    }
}

impl From<Option<ModuleId>> for Route {
    fn from(module: Option<ModuleId>) -> Self {
        module.map_or(Self::Home, Self::Module)
    }
}

impl From<Route> for MountTarget {
    fn from(route: Route) -> Self {
        route.module().into()
    }
}
