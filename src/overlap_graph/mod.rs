/*!
# Overlap Graph Engine

GREEDY and TGREEDY build a graph `G_O` over the input strings plus, for GREEDY, a source and a
sink sentinel. Vertices gain at most one outgoing and one incoming "real" edge, chosen from the
pairwise overlaps in descending-weight order while avoiding premature cycles (GREEDY) or tracking
them explicitly (TGREEDY). Grounded on `original_source/src/greedy.py`; the reachability tracking
and cycle-avoidance bookkeeping use [`fixedbitset::FixedBitSet`] rather than the reference's
Python `set`-per-node map, per the bespoke-structures direction for this engine.
*/

use fixedbitset::FixedBitSet;

use crate::core::error::{Result, SspError};
use crate::core::filter::validate_solver_input;
use crate::core::overlap::overlap;

/// Pairwise overlap weights for a substring-free instance, `ov[i][j]` for `i != j`.
struct OverlapMatrix {
    n: usize,
    weights: Vec<Vec<usize>>,
}

impl OverlapMatrix {
    fn build(strings: &[String]) -> Result<Self> {
        let n = strings.len();
        let mut weights = vec![vec![0usize; n]; n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    weights[i][j] = overlap(&strings[i], &strings[j])?;
                }
            }
        }
        Ok(OverlapMatrix { n, weights })
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.weights[i][j]
    }

    /// All ordered pairs `(i, j)`, `i != j`, sorted by descending overlap weight; pairs with equal
    /// weight keep their generation order (row-major: `i` outer, `j` inner), via a counting sort
    /// bucketed by weight.
    fn sorted_edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.n * self.n.saturating_sub(1));
        for i in 0..self.n {
            for j in 0..self.n {
                if i != j {
                    edges.push((i, j));
                }
            }
        }

        let max_weight = edges
            .iter()
            .map(|&(i, j)| self.get(i, j))
            .max()
            .unwrap_or(0);
        let mut buckets: Vec<Vec<(usize, usize)>> = vec![Vec::new(); max_weight + 1];
        for (i, j) in edges {
            buckets[self.get(i, j)].push((i, j));
        }
        buckets.into_iter().rev().flatten().collect()
    }
}

/// Converts a walk (sequence of edges over the real-edge subgraph, possibly touching sentinel
/// vertices `>= n`) into the superstring it represents, per spec.md §4.3's path-to-string rule.
///
/// Sentinel edges are skipped. If the walk closes a loop back to its own start vertex, the closing
/// edge is dropped (used by TGREEDY's cycle extraction).
///
/// Builds the result as raw bytes: an overlap length is a byte offset, not necessarily a UTF-8
/// character boundary, so `strings[v]` must be sliced as `&[u8]` rather than `&str`. Converted to
/// a `String` only at the end, lossily, so non-UTF-8-safe splits never panic.
fn path_to_string(edges: &[(usize, usize)], n: usize, strings: &[String], ov: &OverlapMatrix) -> String {
    let mut result: Vec<u8> = Vec::new();
    let mut start: Option<usize> = None;

    for &(u, v) in edges {
        if u >= n || v >= n {
            continue;
        }
        if start == Some(v) {
            return String::from_utf8_lossy(&result).into_owned();
        }
        if start.is_none() {
            start = Some(u);
            result = strings[u].as_bytes().to_vec();
        }
        let w = ov.get(u, v);
        result.extend_from_slice(&strings[v].as_bytes()[w..]);
    }

    String::from_utf8_lossy(&result).into_owned()
}

/// Ancestors of `node` (inclusive) under the old reachability relation, plus `node` itself.
fn ancestors_inclusive(node: usize, reachable: &[FixedBitSet]) -> Vec<usize> {
    let mut result = vec![node];
    for (p, set) in reachable.iter().enumerate() {
        if p != node && set.contains(node) {
            result.push(p);
        }
    }
    result
}

/// Descendants of `node` (inclusive) under the old reachability relation, plus `node` itself.
fn descendants_inclusive(node: usize, reachable: &[FixedBitSet]) -> Vec<usize> {
    let mut result = vec![node];
    for s in reachable[node].ones() {
        if s != node {
            result.push(s);
        }
    }
    result
}

/// Solves the given SSP instance with the classical greedy algorithm.
pub fn greedy(strings: &[String]) -> Result<String> {
    validate_solver_input(strings)?;
    greedy_impl(strings)
}

/// The greedy construction itself, without the substring-free precondition check: TGREEDY
/// re-enters this on its `cyclics` multiset, which is not necessarily substring-free.
fn greedy_impl(strings: &[String]) -> Result<String> {
    let n = strings.len();
    if n == 1 {
        return Ok(strings[0].clone());
    }

    let ov = OverlapMatrix::build(strings)?;
    let source = n;
    let sink = n + 1;
    let vertex_count = n + 2;

    let mut edges = ov.sorted_edges();
    edges.extend((0..n).map(|i| (source, i)));
    edges.extend((0..n).map(|i| (i, sink)));

    let mut out_degree = vec![0usize; vertex_count];
    let mut in_degree = vec![0usize; vertex_count];
    let mut forward = vec![None; vertex_count];
    let mut reachable: Vec<FixedBitSet> = (0..vertex_count)
        .map(|_| FixedBitSet::with_capacity(vertex_count))
        .collect();

    for (u, v) in edges {
        if out_degree[u] != 0 || in_degree[v] != 0 || reachable[v].contains(u) {
            continue;
        }
        forward[u] = Some(v);
        out_degree[u] += 1;
        in_degree[v] += 1;

        let prefix = ancestors_inclusive(u, &reachable);
        let suffix = descendants_inclusive(v, &reachable);
        for &p in &prefix {
            for &s in &suffix {
                reachable[p].insert(s);
            }
        }
    }

    let mut walk = Vec::with_capacity(vertex_count);
    let mut cur = source;
    for _ in 0..vertex_count {
        match forward[cur] {
            Some(next) => {
                walk.push((cur, next));
                if next == sink {
                    return Ok(path_to_string(&walk, n, strings, &ov));
                }
                cur = next;
            }
            None => break,
        }
    }

    Err(SspError::unreachable(
        "overlap graph's source-to-sink walk did not terminate at the sink",
    ))
}

/// Solves the given SSP instance with the TGREEDY algorithm: collapse strongly-connected
/// fragments into cycle-strings, then linearise the result with GREEDY.
pub fn tgreedy(strings: &[String]) -> Result<String> {
    validate_solver_input(strings)?;
    let n = strings.len();
    if n == 1 {
        return Ok(strings[0].clone());
    }

    let ov = OverlapMatrix::build(strings)?;
    let edges = ov.sorted_edges();

    let mut out_degree = vec![0usize; n];
    let mut in_degree = vec![0usize; n];
    let mut forward: Vec<Option<usize>> = vec![None; n];
    let mut reachable: Vec<FixedBitSet> = (0..n).map(|_| FixedBitSet::with_capacity(n)).collect();

    let mut cyclics = Vec::new();

    for (u, v) in edges {
        if out_degree[u] != 0 || in_degree[v] != 0 {
            continue;
        }
        forward[u] = Some(v);
        out_degree[u] += 1;
        in_degree[v] += 1;

        if reachable[v].contains(u) {
            let mut cycle_edges = vec![(u, v)];
            let mut cur = v;
            while cur != u {
                let next = forward[cur].expect("cycle must lead back to its closing vertex");
                cycle_edges.push((cur, next));
                cur = next;
            }
            cyclics.push(path_to_string(&cycle_edges, n, strings, &ov));
        } else {
            let prefix = ancestors_inclusive(u, &reachable);
            let suffix = descendants_inclusive(v, &reachable);
            for &p in &prefix {
                for &s in &suffix {
                    reachable[p].insert(s);
                }
            }
        }
    }

    for i in 0..n {
        if out_degree[i] == 0 && in_degree[i] == 0 {
            cyclics.push(strings[i].clone());
        }
    }

    greedy_impl(&cyclics)
}
