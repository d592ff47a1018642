//! Contains the error type for node map lookups and reorderings.

use std::error::Error;
use std::fmt::Display;

use crate::shapes::OrderKey;

/// Errors when looking up or applying node maps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeMapError {
  /// There is no node map for this shape and node count.
  UnsupportedKey(OrderKey),
  /// The data handed for reordering does not have one entry per node.
  LengthMismatch {
    /// The key the data was reordered with.
    key: OrderKey,
    /// The node count of the key.
    expected: usize,
    /// The length of the data.
    found: usize
  }
}

impl Display for NodeMapError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return match self {
      Self::UnsupportedKey(key) => write!(
        f,
        "no node map for a {} with {} nodes",
        key.shape.long_name(),
        key.node_count
      ),
      Self::LengthMismatch { key, expected, found } => write!(
        f,
        "node map {} needs {} entries, got {}",
        key,
        expected,
        found
      ),
    };
  }
}

impl Error for NodeMapError {}
