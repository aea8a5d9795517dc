//! Token stack for cursor-based pagination
//!
//! Continuation tokens are opaque, so going back means remembering every
//! token visited, in order. `PaginationState` is a value: each transition
//! returns a new state and leaves the old one intact.

/// History of visited continuation tokens plus a cursor into it.
///
/// Invariants:
/// - `tokens()[0]` is always `""` (the first page).
/// - `cursor()` is `None` on the first page; otherwise the stack holds
///   exactly `cursor + 2` tokens and the top is the token of the shown page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    cursor: Option<usize>,
    tokens: Vec<String>,
}

impl PaginationState {
    /// Fresh state: on the first page, no history
    pub fn new() -> Self {
        Self {
            cursor: None,
            tokens: vec![String::new()],
        }
    }

    /// Cursor position; `None` means no previous page exists
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Visited tokens, oldest first
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of pages after the first one that have been stepped through
    pub fn depth(&self) -> usize {
        self.tokens.len() - 1
    }

    /// Token of the page currently shown (top of the stack)
    pub fn current_token(&self) -> &str {
        self.tokens.last().map_or("", String::as_str)
    }

    /// Whether "previous" is available
    pub fn has_previous(&self) -> bool {
        self.cursor.is_some()
    }

    /// State after moving forward to the page identified by `token`
    #[must_use]
    pub fn advanced(&self, token: impl Into<String>) -> Self {
        let mut tokens = self.tokens.clone();
        tokens.push(token.into());
        Self {
            cursor: Some(self.cursor.map_or(0, |c| c + 1)),
            tokens,
        }
    }

    /// State after moving back one page, with the token to request.
    ///
    /// Returns `None` on the first page. The reissued token is the one just
    /// below the top of the stack; stepping back from the second page always
    /// lands on the `""` sentinel.
    pub fn retreated(&self) -> Option<(Self, String)> {
        let cursor = self.cursor?;
        let token = self.tokens.get(cursor).cloned().unwrap_or_default();

        let mut tokens = self.tokens.clone();
        if tokens.len() > 1 {
            tokens.pop();
        }

        Some((
            Self {
                cursor: cursor.checked_sub(1),
                tokens,
            },
            token,
        ))
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new()
    }
}
