//! Listing screen model

use super::route::{Route, Router};
use crate::delete::ConfirmDelete;
use crate::fetch::FetchState;
use crate::pagination::PaginationState;

/// Placeholder rows shown while a page loads
pub const PLACEHOLDER_ROWS: usize = 5;

/// Enabled state of the Previous/Next buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerControls {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

/// What a listing screen renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingView<'a, T> {
    /// Request outstanding: skeleton table
    Loading { rows: usize },
    /// Zero items, or the fetch failed: message only, no pager
    Empty { message: &'a str },
    /// Items with pager controls
    Table {
        items: &'a [T],
        controls: PagerControls,
    },
}

impl<'a, T> ListingView<'a, T> {
    /// Derive the view from current state.
    ///
    /// A failed fetch renders like an empty page; callers that want an error
    /// screen check `fetch.error` first.
    pub fn build(
        fetch: &'a FetchState<T>,
        pagination: &PaginationState,
        empty_message: &'a str,
    ) -> Self {
        if fetch.is_loading {
            return Self::Loading {
                rows: PLACEHOLDER_ROWS,
            };
        }

        if fetch.data.is_empty() {
            return Self::Empty {
                message: empty_message,
            };
        }

        Self::Table {
            items: &fetch.data.items,
            controls: PagerControls {
                previous_enabled: pagination.has_previous(),
                next_enabled: fetch.data.has_next(),
            },
        }
    }

    /// Pager controls, if any are rendered
    pub fn controls(&self) -> Option<PagerControls> {
        match self {
            Self::Table { controls, .. } => Some(*controls),
            _ => None,
        }
    }

    /// Rows of the table (empty unless a table is shown)
    pub fn items(&self) -> &'a [T] {
        match self {
            Self::Table { items, .. } => *items,
            _ => &[],
        }
    }
}

/// Per-row menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    pub const ALL: [RowAction; 2] = [RowAction::Edit, RowAction::Delete];

    pub fn label(self) -> &'static str {
        match self {
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }

    /// Map a menu label back to its action
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.label() == label)
    }

    /// Edit navigates to the item's edit route; Delete opens the dialog
    pub fn apply(
        self,
        id: &str,
        collection_route: &str,
        router: &mut impl Router,
        dialog: &mut ConfirmDelete,
    ) {
        match self {
            RowAction::Edit => router.navigate(Route::edit(collection_route, id)),
            RowAction::Delete => dialog.open(id),
        }
    }
}
