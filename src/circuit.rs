use log::debug;

use crate::{Connection, Error};

/// Partition of junction boxes into circuits, as a disjoint-set forest.
#[derive(Debug, Clone)]
pub struct Circuits {
    parents: Vec<usize>,
    // Only meaningful for roots.
    sizes: Vec<usize>,
    circuits_n: usize,
}

impl Circuits {
    pub fn new(boxes_n: usize) -> Self {
        Self {
            parents: (0..boxes_n).collect(),
            sizes: vec![1; boxes_n],
            circuits_n: boxes_n,
        }
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn circuits_n(&self) -> usize {
        self.circuits_n
    }

    /// Panics if `ind` is out of range.
    pub fn find(&mut self, ind: usize) -> usize {
        let mut root = ind;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        let mut cur = ind;
        while self.parents[cur] != root {
            let next = self.parents[cur];
            self.parents[cur] = root;
            cur = next;
        }

        root
    }

    /// Returns false if both boxes are already in the same circuit. Panics if
    /// either index is out of range.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let a_root = self.find(a);
        let b_root = self.find(b);
        if a_root == b_root {
            return false;
        }

        let (big_root, small_root) = if self.sizes[a_root] >= self.sizes[b_root] {
            (a_root, b_root)
        } else {
            (b_root, a_root)
        };
        self.parents[small_root] = big_root;
        self.sizes[big_root] += self.sizes[small_root];
        self.circuits_n -= 1;

        true
    }

    pub fn is_connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    pub fn circuit_size(&mut self, ind: usize) -> usize {
        let root = self.find(ind);
        self.sizes[root]
    }

    /// Sizes of all circuits, largest first.
    pub fn circuit_sizes(&self) -> Vec<usize> {
        let mut sizes = self
            .parents
            .iter()
            .enumerate()
            .filter(|(ind, parent)| ind == *parent)
            .map(|(ind, _)| self.sizes[ind])
            .collect::<Vec<_>>();
        sizes.sort_unstable_by(|a, b| b.cmp(a));

        sizes
    }

    pub fn largest_sizes(&self, n: usize) -> Result<Vec<usize>, Error> {
        if self.circuits_n < n {
            return Err(Error::TooFewCircuits(self.circuits_n, n));
        }

        let mut sizes = self.circuit_sizes();
        sizes.truncate(n);

        Ok(sizes)
    }

    /// Applies all given connections, returns how many of them merged two circuits.
    pub fn connect(&mut self, connections: &[Connection]) -> usize {
        connections
            .iter()
            .filter(|connection| self.union(connection.from_ind(), connection.to_ind()))
            .count()
    }

    /// Applies connections in order until only one circuit is left, and returns
    /// the connection that made it.
    pub fn connect_until_single(&mut self, connections: &[Connection]) -> Result<Connection, Error> {
        if self.circuits_n == 1 {
            return Err(Error::NoConnectionNeeded);
        }

        for (ind, connection) in connections.iter().enumerate() {
            if self.union(connection.from_ind(), connection.to_ind()) && self.circuits_n == 1 {
                debug!(
                    "All junction boxes are connected after {} connection(s).",
                    ind + 1
                );
                return Ok(*connection);
            }
        }

        Err(Error::NeverFullyConnected(self.circuits_n))
    }
}
