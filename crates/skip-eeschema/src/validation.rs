//! Collision diagnostics for library indexing
//!
//! Two symbols may share a raw name, or distinct names may sanitize to the
//! same key (`A.1` and `A-1`). The index keeps the later symbol under that
//! key and the earlier one stays reachable by position only. This is not an
//! error; each occurrence is recorded here instead.

use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Which lookup structure a collision happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// Two symbols share the same raw name
    Identifier,

    /// Two symbols sanitize to the same safe name
    SafeName,
}

/// One key collision observed while indexing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollisionDiagnostic {
    /// Kind of conflict
    pub kind: ConflictKind,

    /// Key both symbols map to
    pub key: String,

    /// Position of the symbol that lost the key
    pub shadowed: usize,

    /// Position of the symbol now holding the key
    pub winner: usize,
}

impl CollisionDiagnostic {
    /// Raw identifier collision
    #[inline]
    #[must_use]
    pub fn identifier(key: impl Into<String>, shadowed: usize, winner: usize) -> Self {
        Self {
            kind: ConflictKind::Identifier,
            key: key.into(),
            shadowed,
            winner,
        }
    }

    /// Safe name collision
    #[inline]
    #[must_use]
    pub fn safe_name(key: impl Into<String>, shadowed: usize, winner: usize) -> Self {
        Self {
            kind: ConflictKind::SafeName,
            key: key.into(),
            shadowed,
            winner,
        }
    }
}

impl Display for CollisionDiagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            ConflictKind::Identifier => "identifier",
            ConflictKind::SafeName => "safe name",
        };
        write!(
            f,
            "{} '{}' of symbol #{} shadowed by symbol #{}",
            what, self.key, self.shadowed, self.winner
        )
    }
}

/// Collisions recorded during one indexing pass, in the order they occurred
#[derive(Debug, Clone, Default, Serialize)]
pub struct CollisionLog {
    entries: Vec<CollisionDiagnostic>,
}

impl CollisionLog {
    /// Create empty log
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a collision, optionally emitting a warning
    pub fn record(&mut self, diagnostic: CollisionDiagnostic, warn: bool) {
        if warn {
            tracing::warn!("Symbol key collision: {}", diagnostic);
        }
        self.entries.push(diagnostic);
    }

    /// All recorded collisions
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[CollisionDiagnostic] {
        &self.entries
    }

    /// Collisions of one kind
    pub fn of_kind(&self, kind: ConflictKind) -> impl Iterator<Item = &CollisionDiagnostic> {
        self.entries.iter().filter(move |d| d.kind == kind)
    }

    /// Positions that lost at least one key, ascending
    #[must_use]
    pub fn shadowed_positions(&self) -> Vec<usize> {
        let mut positions: Vec<usize> = self.entries.iter().map(|d| d.shadowed).collect();
        positions.sort_unstable();
        positions.dedup();
        positions
    }

    /// Number of recorded collisions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no collision was recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
