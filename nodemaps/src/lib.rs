//! This library implements the mappings between the Gmsh numbering of the
//! nodes of high-order finite elements and the internal numbering used by the
//! solver.
//!
//! Mesh readers look up a map by element shape and node count, then use it to
//! move connectivity, coordinates or any other per-node data into the
//! internal ordering. Writers go the other way with the inverse map.
//!
//! For example, node 4 of a 64-node Gmsh hexahedron is internal node 48:
//!
//! ```
//! use nodemaps::prelude::*;
//!
//! let key = OrderKey::new(ElementShape::Hexahedron, 64);
//! assert_eq!(forward_table(key).unwrap()[4], 48);
//! ```

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![allow(clippy::needless_return)]

pub mod errors;
pub mod permutation;
pub mod registry;
pub mod shapes;
mod tables;


/// Commonly used types and functions.
pub mod prelude {
  pub use crate::errors::NodeMapError;
  pub use crate::permutation::PermutationTable;
  pub use crate::registry::{Direction, NodeMaps};
  pub use crate::shapes::{ElementShape, OrderKey};
  pub use crate::{forward_table, inverse_table, reorder};
}

use crate::prelude::*;

/// Returns the Gmsh-to-internal table for a key from the global registry.
pub fn forward_table(
  key: OrderKey
) -> Result<&'static PermutationTable, NodeMapError> {
  return NodeMaps::global().forward_table(key);
}

/// Returns the internal-to-Gmsh table for a key from the global registry.
pub fn inverse_table(
  key: OrderKey
) -> Result<&'static PermutationTable, NodeMapError> {
  return NodeMaps::global().inverse_table(key);
}

/// Reorders per-node data with the global registry.
pub fn reorder<T: Clone>(
  data: &[T],
  key: OrderKey,
  direction: Direction
) -> Result<Vec<T>, NodeMapError> {
  return NodeMaps::global().reorder(data, key, direction);
}
