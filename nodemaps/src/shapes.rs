//! This module defines the element shapes that carry high-order node maps,
//! the keys used to look those maps up, and the relation between polynomial
//! order and node count for each shape.

use std::fmt::Display;
use core::str::FromStr;

use serde::{Serialize, Deserialize};
use clap::ValueEnum;
use convert_case::{Case, Casing};

use crate::tables::GMSH_NODE_MAPS;

/// Generates the ElementShape enum.
macro_rules! gen_shapes {
  (
    $(($vn:ident, $nm:literal, $dim:literal, $nverts:literal),)*
  ) => {
    /// Element shapes with known high-order node maps.
    #[derive(
      Copy, Clone, Debug, Hash, Serialize, Deserialize, PartialEq, Eq,
      PartialOrd, Ord, ValueEnum
    )]
    #[value(rename_all = "lower")]
    #[allow(missing_docs)]
    pub enum ElementShape {
      $(
        #[value(alias = $nm)]
        $vn,
      )*
    }

    impl ElementShape {
      /// Returns the short, lowercase tag of the shape, like "tet".
      pub const fn name(&self) -> &'static str {
        return match self {
          $(Self::$vn => $nm,)*
        };
      }

      /// Returns the full lowercase name of the shape, like "tetrahedron".
      pub fn long_name(&self) -> String {
        return match self {
          $(Self::$vn => stringify!($vn).to_case(Case::Lower),)*
        };
      }

      /// Returns the topological dimension of the shape.
      pub const fn dimension(&self) -> usize {
        return match self {
          $(Self::$vn => $dim,)*
        };
      }

      /// Returns the number of corner vertices, ie. the node count at first
      /// order.
      pub const fn vertex_count(&self) -> usize {
        return match self {
          $(Self::$vn => $nverts,)*
        };
      }

      /// Returns a static slice with all known shapes.
      pub const fn all() -> &'static [Self] {
        return &[
          $(Self::$vn,)*
        ];
      }
    }
  };
}

gen_shapes!(
  // volumes
  (Tetrahedron, "tet", 3, 4),
  (Prism, "pri", 3, 6),
  (Hexahedron, "hex", 3, 8),
  // surfaces
  (Triangle, "tri", 2, 3),
  (Quadrilateral, "quad", 2, 4),
);

impl ElementShape {
  /// Returns the number of nodes of a Lagrange element of this shape at a
  /// given polynomial order, or `None` if computing it overflows.
  pub fn node_count(&self, order: usize) -> Option<usize> {
    let p1 = order.checked_add(1)?;
    let p2 = order.checked_add(2)?;
    return match self {
      Self::Tetrahedron => {
        let p3 = order.checked_add(3)?;
        Some(p1.checked_mul(p2)?.checked_mul(p3)? / 6)
      },
      Self::Prism => Some(p1.checked_mul(p1)?.checked_mul(p2)? / 2),
      Self::Hexahedron => p1.checked_mul(p1)?.checked_mul(p1),
      Self::Triangle => Some(p1.checked_mul(p2)? / 2),
      Self::Quadrilateral => p1.checked_mul(p1),
    };
  }

  /// Returns the polynomial order at which an element of this shape carries
  /// exactly `node_count` nodes, if there is one.
  pub fn order(&self, node_count: usize) -> Option<usize> {
    // smallest p with at least node_count nodes, overflow counting as more
    let reaches = |p: usize| self.node_count(p).map_or(true, |n| n >= node_count);
    let (mut lo, mut hi) = (1, usize::MAX);
    while lo < hi {
      let mid = lo + (hi - lo) / 2;
      if reaches(mid) {
        hi = mid;
      } else {
        lo = mid + 1;
      }
    }
    return (self.node_count(lo)? == node_count).then_some(lo);
  }

  /// Returns the node counts that have a known node map, ascending.
  pub fn supported_node_counts(&self) -> Vec<usize> {
    return GMSH_NODE_MAPS.iter()
      .filter(|(shape, _)| shape == self)
      .map(|(_, map)| map.len())
      .collect();
  }

  /// Returns the highest polynomial order with a known node map.
  pub fn max_order(&self) -> usize {
    return self.supported_node_counts()
      .into_iter()
      .filter_map(|n| self.order(n))
      .max()
      .unwrap_or(0);
  }
}

impl FromStr for ElementShape {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim().to_ascii_lowercase();
    return Self::all()
      .iter()
      .copied()
      .find(|shape| shape.name() == s || shape.long_name() == s)
      .ok_or(());
  }
}

impl Display for ElementShape {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return write!(f, "{}", self.name());
  }
}

/// Identifies one node map: an element shape and how many nodes it carries.
#[derive(
  Copy, Clone, Debug, Hash, Serialize, Deserialize, PartialEq, Eq, PartialOrd,
  Ord
)]
pub struct OrderKey {
  /// The shape of the element.
  pub shape: ElementShape,
  /// The number of nodes in the element.
  pub node_count: usize
}

impl OrderKey {
  /// Creates a key. Whether a node map exists for it is only checked on
  /// lookup.
  pub const fn new(shape: ElementShape, node_count: usize) -> Self {
    return Self { shape, node_count };
  }

  /// Creates the key for an element of a shape at some polynomial order, or
  /// `None` if the node count would overflow.
  pub fn from_order(shape: ElementShape, order: usize) -> Option<Self> {
    return Some(Self { shape, node_count: shape.node_count(order)? });
  }

  /// Returns the polynomial order of the key, if the node count matches one.
  pub fn order(&self) -> Option<usize> {
    return self.shape.order(self.node_count);
  }
}

impl From<(ElementShape, usize)> for OrderKey {
  fn from((shape, node_count): (ElementShape, usize)) -> Self {
    return Self::new(shape, node_count);
  }
}

impl Display for OrderKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return write!(f, "{}/{}", self.shape, self.node_count);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn names_parse_back() {
    for shape in ElementShape::all() {
      assert_eq!(shape.name().parse::<ElementShape>(), Ok(*shape));
      assert_eq!(shape.long_name().parse::<ElementShape>(), Ok(*shape));
    }
    assert_eq!("HEX".parse::<ElementShape>(), Ok(ElementShape::Hexahedron));
    assert_eq!(ElementShape::Quadrilateral.long_name(), "quadrilateral");
    assert_eq!("pyr".parse::<ElementShape>(), Err(()));
  }

  #[test]
  fn node_counts_by_order() {
    let counts = |shape: ElementShape| {
      return (1..=6).map(|p| shape.node_count(p).unwrap()).collect::<Vec<_>>();
    };
    assert_eq!(counts(ElementShape::Tetrahedron), [4, 10, 20, 35, 56, 84]);
    assert_eq!(counts(ElementShape::Prism), [6, 18, 40, 75, 126, 196]);
    assert_eq!(counts(ElementShape::Hexahedron), [8, 27, 64, 125, 216, 343]);
    assert_eq!(counts(ElementShape::Triangle), [3, 6, 10, 15, 21, 28]);
    assert_eq!(counts(ElementShape::Quadrilateral), [4, 9, 16, 25, 36, 49]);
    for shape in ElementShape::all() {
      assert_eq!(shape.node_count(1), Some(shape.vertex_count()));
    }
  }

  #[test]
  fn orders_from_node_counts() {
    assert_eq!(ElementShape::Hexahedron.order(64), Some(3));
    assert_eq!(ElementShape::Hexahedron.order(7), None);
    assert_eq!(ElementShape::Hexahedron.order(0), None);
    assert_eq!(ElementShape::Prism.order(196), Some(6));
    assert_eq!(ElementShape::Triangle.order(1), None);
    let tet10 = OrderKey::from_order(ElementShape::Tetrahedron, 2);
    assert_eq!(tet10.map(|key| key.node_count), Some(10));
  }

  #[test]
  fn huge_counts_do_not_overflow() {
    let huge = OrderKey::new(ElementShape::Hexahedron, usize::MAX);
    assert_eq!(huge.order(), None);
    assert_eq!(ElementShape::Tetrahedron.order(1 << 62), None);
    for shape in ElementShape::all() {
      assert_eq!(shape.order(usize::MAX), None);
      assert_eq!(shape.node_count(usize::MAX), None);
      assert_eq!(OrderKey::from_order(*shape, usize::MAX), None);
    }
    // 2^62 is a square, so the largest orders still resolve exactly
    assert_eq!(ElementShape::Quadrilateral.order(1 << 62), Some((1 << 31) - 1));
    assert_eq!(ElementShape::Quadrilateral.node_count((1 << 32) - 1), None);
  }

  #[test]
  fn supported_orders() {
    assert_eq!(ElementShape::Tetrahedron.max_order(), 6);
    assert_eq!(ElementShape::Prism.max_order(), 6);
    assert_eq!(ElementShape::Hexahedron.max_order(), 5);
    assert_eq!(ElementShape::Triangle.max_order(), 5);
    assert_eq!(ElementShape::Quadrilateral.max_order(), 5);
    assert_eq!(
      ElementShape::Quadrilateral.supported_node_counts(),
      [4, 9, 16, 25, 36]
    );
  }

  #[test]
  fn key_display() {
    let key = OrderKey::new(ElementShape::Tetrahedron, 10);
    assert_eq!(key.to_string(), "tet/10");
    assert_eq!(OrderKey::from((ElementShape::Tetrahedron, 10)), key);
  }
}
