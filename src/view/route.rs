//! Dashboard routes and the navigate capability

use crate::error::{Error, Result};
use std::fmt;

/// A dashboard page reachable from a listing screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The listing itself, e.g. "/dashboard/templates"
    Collection { collection: String },
    /// Create form, e.g. "/dashboard/templates/new"
    New { collection: String },
    /// Edit form, e.g. "/dashboard/templates/welcome/edit"
    Edit { collection: String, id: String },
}

impl Route {
    pub fn collection(collection: impl Into<String>) -> Self {
        Self::Collection {
            collection: collection.into(),
        }
    }

    pub fn new_item(collection: impl Into<String>) -> Self {
        Self::New {
            collection: collection.into(),
        }
    }

    pub fn edit(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::Edit {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Path of the route; `collection` is the full collection route
    pub fn path(&self) -> String {
        match self {
            Route::Collection { collection } => trim(collection).to_string(),
            Route::New { collection } => format!("{}/new", trim(collection)),
            Route::Edit { collection, id } => format!("{}/{id}/edit", trim(collection)),
        }
    }

    /// Parse a path produced by [`Route::path`]
    pub fn parse(path: &str) -> Result<Self> {
        let path = trim(path);
        if path.is_empty() {
            return Err(Error::navigation("empty route"));
        }

        if let Some(collection) = path.strip_suffix("/new") {
            return Ok(Self::new_item(collection));
        }

        if let Some(rest) = path.strip_suffix("/edit") {
            let (collection, id) = rest
                .rsplit_once('/')
                .ok_or_else(|| Error::navigation(format!("malformed edit route '{path}'")))?;
            if id.is_empty() || collection.is_empty() {
                return Err(Error::navigation(format!("malformed edit route '{path}'")));
            }
            return Ok(Self::edit(collection, id));
        }

        Ok(Self::collection(path))
    }
}

fn trim(path: &str) -> &str {
    path.trim_end_matches('/')
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Moves the front end to another page
pub trait Router {
    fn navigate(&mut self, route: Route);
}

/// Records every navigation; useful for headless front ends
impl Router for Vec<Route> {
    fn navigate(&mut self, route: Route) {
        self.push(route);
    }
}
