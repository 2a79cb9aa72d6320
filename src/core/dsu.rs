/*!
# Representative-Tracking Disjoint Set Union

A union-find over the dense integer ids produced by [`crate::core::substrings::SubstringTable`].
Besides the usual `find`/`union` with path compression and union by rank, each set tracks a
*representative*: the member that sorts last under the key `(Reverse(length), content)`, i.e. the
shortest string in the set, breaking ties by taking the lexicographically largest one. The
hierarchical graph engine uses this representative to decide when a node is the last surviving
copy of its set (see `hierarchical_graph::double_and_collapse` and `::construct_greedy_graph`).

Content is compared as raw bytes (`Vec<u8>`), consistent with [`crate::core::substrings`]'s
byte-level interning.
*/

use std::cmp::Reverse;

/// Disjoint set union over ids `0..n`, each id carrying its own byte content for the
/// representative ordering.
pub struct Dsu {
    parent: Vec<u32>,
    rank: Vec<u32>,
    /// Current representative id for the root of each tree (indexed by id, meaningful only at
    /// roots; non-root entries are stale and never read).
    rep: Vec<u32>,
    lengths: Vec<u32>,
}

impl Dsu {
    /// Builds a DSU where `contents[i]` is the byte string represented by id `i`. Each id starts
    /// as its own singleton set, with itself as the representative.
    pub fn new(contents: &[Vec<u8>]) -> Self {
        let n = contents.len();
        Dsu {
            parent: (0..n as u32).collect(),
            rank: vec![0; n],
            rep: (0..n as u32).collect(),
            lengths: contents.iter().map(|s| s.len() as u32).collect(),
        }
    }

    /// Finds the root of `a`'s set, compressing the path along the way.
    pub fn find(&mut self, a: u32) -> u32 {
        if self.parent[a as usize] != a {
            let root = self.find(self.parent[a as usize]);
            self.parent[a as usize] = root;
        }
        self.parent[a as usize]
    }

    /// Returns the current representative of `a`'s set: the shortest member, ties broken by
    /// lexicographically-largest content.
    pub fn representative(&mut self, a: u32, contents: &[Vec<u8>]) -> u32 {
        let root = self.find(a);
        let _ = contents;
        self.rep[root as usize]
    }

    /// Merges the sets containing `a` and `b`, by rank, refreshing the surviving root's
    /// representative.
    pub fn union(&mut self, a: u32, b: u32, contents: &[Vec<u8>]) {
        let mut ra = self.find(a);
        let mut rb = self.find(b);
        if ra == rb {
            return;
        }
        if self.rank[ra as usize] < self.rank[rb as usize] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb as usize] = ra;
        if self.rank[ra as usize] == self.rank[rb as usize] {
            self.rank[ra as usize] += 1;
        }

        let rep_a = self.rep[ra as usize];
        let rep_b = self.rep[rb as usize];
        self.rep[ra as usize] = Self::pick_representative(rep_a, rep_b, contents, &self.lengths);
    }

    /// Picks the winner between two representative candidates under the `(Reverse(length),
    /// content)` key; smaller key wins, i.e. longer strings lose to shorter ones, and among equal
    /// lengths the lexicographically smaller string loses.
    fn pick_representative(a: u32, b: u32, contents: &[Vec<u8>], lengths: &[u32]) -> u32 {
        let key_a = (Reverse(lengths[a as usize]), &contents[a as usize]);
        let key_b = (Reverse(lengths[b as usize]), &contents[b as usize]);
        if key_a < key_b { b } else { a }
    }
}
