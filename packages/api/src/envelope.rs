//! # Response envelopes
//!
//! The backend wraps every payload in at least one `{"data": …}` envelope,
//! and its older todo list endpoint wraps *each element* a second time.
//! The nesting is not uniform across endpoints, so the unwrap depth is
//! declared at the call site by the type an endpoint deserializes into —
//! [`Envelope`] for the common single wrap, [`NestedEnvelope`] for the legacy
//! doubly-wrapped list — and never inferred from the payload. An endpoint
//! whose nesting is undocumented should be treated as single-wrapped and
//! flagged when it fails to decode.

use serde::{Deserialize, Serialize};

/// The single-level wrapper used by most endpoints: `{"data": T}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// The legacy list shape where every element carries its own envelope:
/// `{"data": [{"data": T}, …]}`. Only the older todo list endpoint still
/// produces this.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NestedEnvelope<T> {
    pub data: Vec<Envelope<T>>,
}

impl<T> NestedEnvelope<T> {
    /// Strip both wrap levels.
    pub fn into_inner(self) -> Vec<T> {
        self.data.into_iter().map(|element| element.data).collect()
    }
}
