use serde::{Deserialize, Serialize};

enum TreeDir {
    Left,
    Right,
}

// complete binary tree over `width` leaves stored level by level:
// node k has children 2k+1 and 2k+2, leaf i sits at width-1+i
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree<V> {
    nodes: Vec<V>,
    width: usize,
}

impl<V> Tree<V> {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the layout is the one `new` builds for `leaf_count` leaves.
    ///
    /// Only decoded trees can fail this.
    pub fn fits_leaf_count(&self, leaf_count: usize) -> bool {
        leaf_count.checked_next_power_of_two() == Some(self.width)
            && self.width.checked_mul(2) == Some(self.nodes.len() + 1)
    }
}

impl<V: Copy> Tree<V> {
    pub fn new(value: V, leaf_count: usize) -> Self {
        let width = leaf_count.next_power_of_two();
        Self {
            nodes: vec![value; 2 * width - 1],
            width,
        }
    }

    pub fn root(&self) -> usize {
        0
    }

    pub fn parent(&self, node: usize) -> Option<usize> {
        if node == self.root() {
            None
        } else {
            Some((node - 1) / 2)
        }
    }

    fn child(&self, node: usize, dir: TreeDir) -> usize {
        match dir {
            TreeDir::Left => 2 * node + 1,
            TreeDir::Right => 2 * node + 2,
        }
    }

    // assumes an inner node was provided
    pub fn children(&self, node: usize) -> (usize, usize) {
        debug_assert!(node < self.width - 1, "node {node} is a leaf");
        (
            self.child(node, TreeDir::Left),
            self.child(node, TreeDir::Right),
        )
    }

    pub fn leaf(&self, index: usize) -> usize {
        debug_assert!(index < self.width, "leaf {index} out of {}", self.width);
        self.width - 1 + index
    }

    pub fn value(&self, node: usize) -> V {
        self.nodes[node]
    }

    pub fn set_value(&mut self, node: usize, value: V) {
        self.nodes[node] = value;
    }

    pub fn set_leaves(&mut self, leaves: &[V]) {
        let first_leaf = self.leaf(0);
        self.nodes[first_leaf..first_leaf + leaves.len()].copy_from_slice(leaves);
    }

    // recomputes every inner node from its children
    pub fn rebuild<F: Fn(V, V) -> V>(&mut self, combine: F) {
        for node in (0..self.width - 1).rev() {
            let (left, right) = self.children(node);
            self.nodes[node] = combine(self.nodes[left], self.nodes[right]);
        }
    }
}
