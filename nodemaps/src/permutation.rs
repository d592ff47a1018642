//! This module implements permutation tables, which reindex per-node data
//! from one node ordering into another.

use std::fmt::Display;
use std::ops::Index;

use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error as DeError;

/// A bijection on `0..len`, stored as the image of each index.
///
/// Values of this type can only be built from index lists that contain every
/// number in `0..len` exactly once, so every table is a valid permutation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PermutationTable {
  /// The image of each index.
  indices: Box<[usize]>
}

impl PermutationTable {
  /// The identity permutation of a given length.
  pub fn identity(len: usize) -> Self {
    return Self { indices: (0..len).collect() };
  }

  /// The number of indices permuted.
  pub fn len(&self) -> usize {
    return self.indices.len();
  }

  /// Whether this permutes nothing at all.
  pub fn is_empty(&self) -> bool {
    return self.indices.is_empty();
  }

  /// Returns the image of an index, if it is in range.
  pub fn get(&self, index: usize) -> Option<usize> {
    return self.indices.get(index).copied();
  }

  /// Returns the images of all indices, in order.
  pub fn as_slice(&self) -> &[usize] {
    return &self.indices;
  }

  /// Iterates over the images of all indices, in order.
  pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
    return self.indices.iter().copied();
  }

  /// Whether every index maps to itself.
  pub fn is_identity(&self) -> bool {
    return self.iter().enumerate().all(|(i, j)| i == j);
  }

  /// Computes the inverse permutation, such that
  /// `inverse[self[i]] == i` for every index.
  pub fn inverse(&self) -> Self {
    let mut inverse = vec![0; self.len()];
    for (i, j) in self.iter().enumerate() {
      inverse[j] = i;
    }
    return Self { indices: inverse.into_boxed_slice() };
  }

  /// Moves the value at each position `i` to position `self[i]`, returning
  /// the moved values. Returns `None` if the data is not as long as the
  /// table.
  pub fn apply<T: Clone>(&self, data: &[T]) -> Option<Vec<T>> {
    if data.len() != self.len() {
      return None;
    }
    let mut moved: Vec<Option<T>> = (0..data.len()).map(|_| None).collect();
    for (i, j) in self.iter().enumerate() {
      moved[j] = Some(data[i].clone());
    }
    // every slot is filled once, being a bijection
    return moved.into_iter().collect();
  }

  /// Undoes [`apply`](Self::apply): takes the value at position `self[i]`
  /// into position `i`. Returns `None` if the data is not as long as the
  /// table.
  pub fn apply_inverse<T: Clone>(&self, data: &[T]) -> Option<Vec<T>> {
    if data.len() != self.len() {
      return None;
    }
    return Some(self.iter().map(|j| data[j].clone()).collect());
  }
}

impl TryFrom<Vec<usize>> for PermutationTable {
  type Error = ();

  fn try_from(indices: Vec<usize>) -> Result<Self, Self::Error> {
    let mut seen = vec![false; indices.len()];
    for &j in indices.iter() {
      match seen.get_mut(j) {
        Some(s) if !*s => *s = true,
        // out of range or repeated
        _ => return Err(())
      }
    }
    return Ok(Self { indices: indices.into_boxed_slice() });
  }
}

impl TryFrom<&[usize]> for PermutationTable {
  type Error = ();

  fn try_from(indices: &[usize]) -> Result<Self, Self::Error> {
    return Self::try_from(indices.to_vec());
  }
}

impl Index<usize> for PermutationTable {
  type Output = usize;

  fn index(&self, index: usize) -> &Self::Output {
    return &self.indices[index];
  }
}

impl Display for PermutationTable {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return write!(f, "[{}]", self.indices.iter().join(", "));
  }
}

impl Serialize for PermutationTable {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    return serializer.collect_seq(self.indices.iter());
  }
}

impl<'de> Deserialize<'de> for PermutationTable {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let indices = Vec::<usize>::deserialize(deserializer)?;
    return Self::try_from(indices)
      .map_err(|_| D::Error::custom("indices do not form a permutation"));
  }
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  fn table(indices: &[usize]) -> PermutationTable {
    return PermutationTable::try_from(indices).unwrap();
  }

  #[test]
  fn rejects_non_permutations() {
    let check = |indices: &[usize]| PermutationTable::try_from(indices).is_ok();
    assert!(check(&[0, 1, 2]));
    assert!(check(&[]));
    assert!(!check(&[0, 0, 2]));
    assert!(!check(&[0, 1, 3]));
    assert!(!check(&[1]));
    let empty = PermutationTable::try_from(Vec::<usize>::new());
    assert_eq!(empty.map(|t| t.len()), Ok(0));
  }

  #[test]
  fn inverse_undoes() {
    let table = table(&[2, 0, 3, 1]);
    let inverse = table.inverse();
    assert_eq!(inverse.as_slice(), &[1, 3, 0, 2]);
    for i in 0..table.len() {
      assert_eq!(inverse[table[i]], i);
      assert_eq!(table[inverse[i]], i);
    }
    assert_eq!(inverse.inverse(), table);
    assert!(!table.is_identity());
    assert!(PermutationTable::identity(5).inverse().is_identity());
  }

  #[test]
  fn apply_moves_values() {
    let table = table(&[2, 0, 1]);
    let data = ["a", "b", "c"];
    let moved = table.apply(&data).unwrap();
    assert_eq!(moved, ["b", "c", "a"]);
    assert_eq!(table.apply_inverse(&moved).unwrap(), data);
    assert_eq!(table.inverse().apply(&data), table.apply_inverse(&data));
    assert_eq!(table.apply(&data[..2]), None);
    assert_eq!(table.apply_inverse(&["a", "b", "c", "d"]), None);
  }

  /// Counts how many times it gets cloned.
  struct Counted<'a>(&'a Cell<usize>);

  impl Clone for Counted<'_> {
    fn clone(&self) -> Self {
      self.0.set(self.0.get() + 1);
      return Self(self.0);
    }
  }

  #[test]
  fn apply_clones_each_value_once() {
    let clones = Cell::new(0);
    let table = table(&[3, 1, 4, 0, 2]);
    let data = (0..table.len()).map(|_| Counted(&clones)).collect::<Vec<_>>();
    assert_eq!(table.apply(&data).map(|moved| moved.len()), Some(5));
    assert_eq!(clones.get(), 5);
    clones.set(0);
    assert!(table.apply_inverse(&data).is_some());
    assert_eq!(clones.get(), 5);
  }

  #[test]
  fn identity_moves_nothing() {
    let identity = PermutationTable::identity(4);
    assert_eq!(identity.as_slice(), &[0, 1, 2, 3]);
    assert_eq!(identity.apply(&[7, 8, 9, 10]), Some(vec![7, 8, 9, 10]));
    assert!(PermutationTable::identity(0).is_empty());
  }

  #[test]
  fn display_and_serde() {
    let table = table(&[1, 0, 2]);
    assert_eq!(table.to_string(), "[1, 0, 2]");
    let json = serde_json::to_string(&table).unwrap();
    assert_eq!(json, "[1,0,2]");
    let back: PermutationTable = serde_json::from_str(&json).unwrap();
    assert_eq!(back, table);
    assert!(serde_json::from_str::<PermutationTable>("[1,1,2]").is_err());
  }
}
