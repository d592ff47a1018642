//! This module implements the registry of node maps, which looks tables up by
//! key, inverts them on demand and applies them to per-node data.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use log::debug;
use nalgebra::{DMatrix, Scalar};
use serde::{Serialize, Deserialize};

use crate::errors::NodeMapError;
use crate::permutation::PermutationTable;
use crate::shapes::OrderKey;
use crate::tables::GMSH_NODE_MAPS;

/// The process-wide registry.
static GLOBAL: OnceLock<NodeMaps> = OnceLock::new();

/// Which way per-node data is reordered.
#[derive(
  Copy, Clone, Debug, Hash, Serialize, Deserialize, PartialEq, Eq,
  derive_more::Display
)]
pub enum Direction {
  /// From the Gmsh ordering into the internal ordering.
  #[display(fmt = "to internal")]
  ToInternal,
  /// From the internal ordering back into the Gmsh ordering.
  #[display(fmt = "to external")]
  ToExternal
}

impl Direction {
  /// Returns the opposite direction.
  pub const fn reversed(&self) -> Self {
    return match self {
      Self::ToInternal => Self::ToExternal,
      Self::ToExternal => Self::ToInternal,
    };
  }
}

/// A forward table and its lazily computed inverse.
#[derive(Debug)]
struct Entry {
  /// Gmsh node number to internal node number.
  forward: PermutationTable,
  /// Internal node number to Gmsh node number, filled on first use.
  inverse: OnceLock<PermutationTable>
}

/// All the known node maps, keyed by element shape and node count.
#[derive(Debug)]
pub struct NodeMaps {
  /// The entries, one per supported key.
  entries: BTreeMap<OrderKey, Entry>
}

impl Default for NodeMaps {
  fn default() -> Self {
    return Self::new();
  }
}

impl NodeMaps {
  /// Builds a registry from the built-in tables. Inverses are computed
  /// later, once per key, when first needed.
  pub fn new() -> Self {
    let entries = GMSH_NODE_MAPS.iter()
      .map(|&(shape, raw)| {
        let key = OrderKey::new(shape, raw.len());
        let forward = match PermutationTable::try_from(raw) {
          Ok(table) => table,
          Err(()) => panic!("built-in node map {} is not a permutation", key)
        };
        return (key, Entry { forward, inverse: OnceLock::new() });
      })
      .collect::<BTreeMap<_, _>>();
    debug!("Built a registry of {} node maps.", entries.len());
    return Self { entries };
  }

  /// Returns the process-wide registry, building it on first access.
  pub fn global() -> &'static Self {
    return GLOBAL.get_or_init(Self::new);
  }

  /// Looks up the entry for a key.
  fn entry(&self, key: OrderKey) -> Result<&Entry, NodeMapError> {
    return self.entries.get(&key).ok_or(NodeMapError::UnsupportedKey(key));
  }

  /// Whether there is a node map for a key.
  pub fn contains(&self, key: OrderKey) -> bool {
    return self.entries.contains_key(&key);
  }

  /// Iterates over all supported keys, ordered by shape then node count.
  pub fn keys(&self) -> impl Iterator<Item = OrderKey> + '_ {
    return self.entries.keys().copied();
  }

  /// The number of supported keys.
  pub fn len(&self) -> usize {
    return self.entries.len();
  }

  /// Whether the registry holds no node maps at all.
  pub fn is_empty(&self) -> bool {
    return self.entries.is_empty();
  }

  /// Returns the table mapping Gmsh node numbers to internal node numbers.
  pub fn forward_table(
    &self,
    key: OrderKey
  ) -> Result<&PermutationTable, NodeMapError> {
    return Ok(&self.entry(key)?.forward);
  }

  /// Returns the table mapping internal node numbers to Gmsh node numbers.
  pub fn inverse_table(
    &self,
    key: OrderKey
  ) -> Result<&PermutationTable, NodeMapError> {
    let entry = self.entry(key)?;
    return Ok(entry.inverse.get_or_init(|| {
      debug!("Inverting node map {}.", key);
      return entry.forward.inverse();
    }));
  }

  /// Returns the table that moves data in a given direction.
  pub fn table(
    &self,
    key: OrderKey,
    direction: Direction
  ) -> Result<&PermutationTable, NodeMapError> {
    return match direction {
      Direction::ToInternal => self.forward_table(key),
      Direction::ToExternal => self.inverse_table(key),
    };
  }

  /// Reorders per-node data. Going to the internal ordering, the value at
  /// Gmsh position `i` ends up at position `forward[i]`; going to the
  /// external ordering does the opposite.
  pub fn reorder<T: Clone>(
    &self,
    data: &[T],
    key: OrderKey,
    direction: Direction
  ) -> Result<Vec<T>, NodeMapError> {
    let table = self.table(key, direction)?;
    return table.apply(data).ok_or(NodeMapError::LengthMismatch {
      key,
      expected: table.len(),
      found: data.len()
    });
  }

  /// Reorders the rows of a matrix with one row per node, such as nodal
  /// coordinates.
  pub fn reorder_rows<T: Scalar>(
    &self,
    matrix: &DMatrix<T>,
    key: OrderKey,
    direction: Direction
  ) -> Result<DMatrix<T>, NodeMapError> {
    // row j of the result comes from row source[j]
    let source = self.table(key, direction.reversed())?;
    if matrix.nrows() != source.len() {
      return Err(NodeMapError::LengthMismatch {
        key,
        expected: source.len(),
        found: matrix.nrows()
      });
    }
    return Ok(DMatrix::from_fn(matrix.nrows(), matrix.ncols(), |r, c| {
      return matrix[(source[r], c)].clone();
    }));
  }
}
