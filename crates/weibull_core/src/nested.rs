//! Nested generic sequences for two or more dimensions.

use serde::Serialize;

/// An array-of-arrays of `f64`.
///
/// The innermost axis is a [`NestedArray::Leaf`]; every outer axis is a
/// [`NestedArray::Branch`]. Serialises as plain nested JSON arrays.
///
/// # Examples
///
/// ```rust
/// use weibull_core::NestedArray;
///
/// let nested = NestedArray::Branch(vec![
///     NestedArray::Leaf(vec![1.0, 2.0]),
///     NestedArray::Leaf(vec![3.0, 4.0]),
/// ]);
/// assert_eq!(nested.shape(), vec![2, 2]);
/// assert_eq!(nested.flatten(), vec![1.0, 2.0, 3.0, 4.0]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NestedArray {
    /// Innermost axis.
    Leaf(Vec<f64>),
    /// An outer axis.
    Branch(Vec<NestedArray>),
}

impl NestedArray {
    /// Number of entries along the outermost axis.
    pub fn len(&self) -> usize {
        match self {
            NestedArray::Leaf(values) => values.len(),
            NestedArray::Branch(children) => children.len(),
        }
    }

    /// Whether the outermost axis is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Per-axis lengths, following the first entry at every level.
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = Vec::new();
        let mut node = self;
        loop {
            shape.push(node.len());
            match node {
                NestedArray::Branch(children) => match children.first() {
                    Some(child) => node = child,
                    None => break,
                },
                NestedArray::Leaf(_) => break,
            }
        }
        shape
    }

    /// Total number of leaf values.
    pub fn element_count(&self) -> usize {
        match self {
            NestedArray::Leaf(values) => values.len(),
            NestedArray::Branch(children) => children.iter().map(Self::element_count).sum(),
        }
    }

    /// Leaf values, outer-to-inner with each inner axis index-ascending.
    pub fn flatten(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.element_count());
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut Vec<f64>) {
        match self {
            NestedArray::Leaf(values) => out.extend_from_slice(values),
            NestedArray::Branch(children) => {
                for child in children {
                    child.flatten_into(out);
                }
            }
        }
    }

    /// The child at `index` of a branch.
    pub fn child(&self, index: usize) -> Option<&NestedArray> {
        match self {
            NestedArray::Branch(children) => children.get(index),
            NestedArray::Leaf(_) => None,
        }
    }

    /// The leaf values, if this is the innermost axis.
    pub fn as_leaf(&self) -> Option<&[f64]> {
        match self {
            NestedArray::Leaf(values) => Some(values),
            NestedArray::Branch(_) => None,
        }
    }
}
