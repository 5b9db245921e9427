use super::geom::{Pos, Rect};
use std::ops::BitOr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Sense(u8);

impl Sense {
    pub const HOVER: Self = Self(1 << 0);
    pub const CLICK: Self = Self(1 << 1);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for Sense {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// One word cell or blank run of the grid, by cell index.
    GridCell { index: usize },
    SearchInput,
    ClearButton,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub rect: Rect,
    pub z: u32,
    pub sense: Sense,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(rect: Rect, sense: Sense, kind: NodeKind) -> Self {
        Self {
            rect,
            z: 0,
            sense,
            kind,
        }
    }

    pub fn contains(&self, p: Pos) -> bool {
        self.rect.contains(p)
    }
}

/// Hit-test targets registered during the last frame.
#[derive(Clone, Debug, Default)]
pub struct UiTree {
    nodes: Vec<Node>,
}

impl UiTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn push(&mut self, mut node: Node) {
        // Default z-order: insertion order.
        if node.z == 0 {
            node.z = self.nodes.len() as u32;
        }
        self.nodes.push(node);
    }

    pub fn hit_test(&self, p: Pos, required: Sense) -> Option<&Node> {
        self.nodes
            .iter()
            .filter(|n| n.sense.contains(required) && n.contains(p))
            .max_by_key(|n| n.z)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/tree.rs"]
mod tests;
