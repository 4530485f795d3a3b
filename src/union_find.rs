use anyhow::{bail, Result};

/// Union-Find (Disjoint Sets) data structure for incremental connectivity
#[derive(Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Create a new UnionFind with n singleton components
    pub fn new(n: usize) -> Self {
        let parent = (0..n).collect();
        let size = vec![1; n];
        UnionFind {
            parent,
            size,
            count: n,
        }
    }

    fn check_index(&self, x: usize) -> Result<()> {
        if x >= self.parent.len() {
            bail!(
                "element index {} out of bounds for universe of {} elements",
                x,
                self.parent.len()
            );
        }
        Ok(())
    }

    /// Find the root of element x with path compression
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check_index(x)?;
        Ok(self.find_root(x))
    }

    // Valid index only; callers bounds-check first.
    fn find_root(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            let root = self.find_root(self.parent[x]);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    /// Union the components containing x and y
    ///
    /// Weighted union: the root of the smaller component is attached under
    /// the root of the larger. No-op if x and y are already connected.
    pub fn union(&mut self, x: usize, y: usize) -> Result<()> {
        self.check_index(x)?;
        self.check_index(y)?;

        let root_x = self.find_root(x);
        let root_y = self.find_root(y);

        if root_x == root_y {
            return Ok(());
        }

        if self.size[root_x] < self.size[root_y] {
            self.parent[root_x] = root_y;
            self.size[root_y] += self.size[root_x];
        } else {
            self.parent[root_y] = root_x;
            self.size[root_x] += self.size[root_y];
        }
        self.count -= 1;

        Ok(())
    }

    /// Check if two elements are in the same component
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Number of disjoint components remaining
    pub fn component_count(&self) -> usize {
        self.count
    }
}
