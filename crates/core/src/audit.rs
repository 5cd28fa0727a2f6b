//! Audit trail vocabulary and change-description formatting.
//!
//! The wording produced here is what users read in the audit view, so every
//! mutating code path (service layer and sample-data seeding) goes through
//! these helpers instead of formatting strings inline.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Action constants
// ---------------------------------------------------------------------------

/// Known actions for audit log entries.
pub mod actions {
    pub const CAMPAIGN_CREATED: &str = "Campaign Created";
    pub const CAMPAIGN_UPDATED: &str = "Campaign Updated";
    pub const CAMPAIGN_DELETED: &str = "Campaign Deleted";
}

/// Address recorded when the caller's address cannot be determined.
pub const FALLBACK_IP: &str = "127.0.0.1";

// ---------------------------------------------------------------------------
// Actor
// ---------------------------------------------------------------------------

/// The user every audit entry is attributed to.
///
/// There is no authentication, so the actor is fixed per process and comes
/// from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditActor {
    pub user_id: String,
    pub user_name: String,
}

impl Default for AuditActor {
    fn default() -> Self {
        Self {
            user_id: "user-1".to_string(),
            user_name: "Sarah Johnson".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Change descriptions
// ---------------------------------------------------------------------------

/// Accumulates `"Field: old → new"` fragments for an update.
#[derive(Debug, Default)]
pub struct ChangeSet {
    entries: Vec<String>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change only when `new` is present and differs from `old`.
    pub fn track<T>(&mut self, label: &str, old: &T, new: Option<&T>)
    where
        T: PartialEq + std::fmt::Display + ?Sized,
    {
        if let Some(new) = new {
            if new != old {
                self.entries.push(format!("{label}: {old} → {new}"));
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Comma-joined description; empty when nothing changed.
    pub fn describe(&self) -> String {
        self.entries.join(", ")
    }
}

/// Description attached to a creation entry.
pub fn describe_creation(budget: &str, status: &str) -> String {
    format!("Budget: {budget}, Status: {status}")
}

/// Description attached to a deletion entry.
pub fn describe_deletion(budget: &str) -> String {
    format!("Budget: {budget}")
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Page size used when the caller gives none (or a non-positive one).
pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Read the integer a query value starts with, ignoring anything after it.
///
/// Leading whitespace and one sign are allowed, so `" 12"`, `"-3"` and
/// `"2.5"` read as 12, -3 and 2. Values with no leading digits, such as
/// `"abc"` or `""`, yield `None`. Over-long digit runs saturate.
pub fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: Option<i64> = None;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(digit - b'0');
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(d));
    }
    value.map(|v| if negative { -v } else { v })
}

/// Resolve `limit`/`offset` into a usable window.
///
/// Missing, zero or negative limits fall back to [`DEFAULT_PAGE_LIMIT`];
/// missing or negative offsets fall back to zero.
pub fn page_window(limit: Option<i64>, offset: Option<i64>) -> (usize, usize) {
    let limit = match limit {
        Some(l) if l > 0 => usize::try_from(l).unwrap_or(usize::MAX),
        _ => DEFAULT_PAGE_LIMIT,
    };
    let offset = match offset {
        Some(o) if o > 0 => usize::try_from(o).unwrap_or(usize::MAX),
        _ => 0,
    };
    (limit, offset)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
