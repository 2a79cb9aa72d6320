/*!
# Hierarchical Multigraph Engine

GHA and CA build a multigraph over the vertex universe {ε} ∪ every substring of every input, then
extract a superstring as an Eulerian circuit starting at ε. Grounded on
`original_source/src/hierarchical.py`; adjacency is a pair of `BTreeMap`-backed multiplicity
tables indexed by the dense ids from [`crate::core::substrings::SubstringTable`] instead of
`networkx`'s string-keyed `MultiDiGraph`, and node sets use [`crate::core::dsu::Dsu`] instead of a
Python dict-backed union-find.
*/

use std::collections::{BTreeMap, HashSet};

use crate::core::dsu::Dsu;
use crate::core::error::{Result, SspError};
use crate::core::filter::validate_solver_input;
use crate::core::overlap::overlap;
use crate::core::substrings::SubstringTable;

/// A multigraph over interned substrings, with edge multiplicities tracked per direction.
pub struct HierarchicalGraph {
    table: SubstringTable,
    out_edges: Vec<BTreeMap<u32, u32>>,
    in_edges: Vec<BTreeMap<u32, u32>>,
}

impl HierarchicalGraph {
    /// Builds the vertex universe (every substring of every input, plus ε) with no edges yet.
    pub fn new(strings: &[String]) -> Self {
        let table = SubstringTable::build(strings);
        let n = table.len();
        HierarchicalGraph {
            table,
            out_edges: vec![BTreeMap::new(); n],
            in_edges: vec![BTreeMap::new(); n],
        }
    }

    fn add_edge_copies(&mut self, u: u32, v: u32, count: u32) {
        if count == 0 {
            return;
        }
        *self.out_edges[u as usize].entry(v).or_insert(0) += count;
        *self.in_edges[v as usize].entry(u).or_insert(0) += count;
    }

    fn remove_edge_copy(&mut self, u: u32, v: u32) {
        let out = self.out_edges[u as usize].get_mut(&v).expect("edge must exist to remove");
        *out -= 1;
        if *out == 0 {
            self.out_edges[u as usize].remove(&v);
        }
        let in_mult = self.in_edges[v as usize].get_mut(&u).expect("mirrored edge must exist");
        *in_mult -= 1;
        if *in_mult == 0 {
            self.in_edges[v as usize].remove(&u);
        }
    }

    fn multiplicity(&self, u: u32, v: u32) -> u32 {
        self.out_edges[u as usize].get(&v).copied().unwrap_or(0)
    }

    fn has_edge(&self, u: u32, v: u32) -> bool {
        self.multiplicity(u, v) > 0
    }

    fn degree(&self, v: u32) -> u32 {
        let out: u32 = self.out_edges[v as usize].values().sum();
        let inn: u32 = self.in_edges[v as usize].values().sum();
        out + inn
    }

    fn is_isolated(&self, v: u32) -> bool {
        self.out_edges[v as usize].is_empty() && self.in_edges[v as usize].is_empty()
    }

    /// Sum of multiplicities of edges `v -> w` with `len(w) == len(v) + 1`.
    fn outdeg_one_longer(&self, v: u32) -> u32 {
        let target_len = self.table.content(v).len() + 1;
        self.out_edges[v as usize]
            .iter()
            .filter(|(&w, _)| self.table.content(w).len() == target_len)
            .map(|(_, &m)| m)
            .sum()
    }

    /// Sum of multiplicities of edges `u -> v` with `len(u) == len(v) + 1`.
    fn indeg_one_longer(&self, v: u32) -> u32 {
        let target_len = self.table.content(v).len() + 1;
        self.in_edges[v as usize]
            .iter()
            .filter(|(&u, _)| self.table.content(u).len() == target_len)
            .map(|(_, &m)| m)
            .sum()
    }

    /// All interned ids except ε, sorted longest-first then lexicographically ascending —
    /// the order every hierarchical-graph operation iterates nodes in.
    fn node_order_excluding_epsilon(&self) -> Vec<u32> {
        let epsilon = self.table.epsilon();
        let mut ids: Vec<u32> = (0..self.table.len() as u32).filter(|&id| id != epsilon).collect();
        ids.sort_by(|&a, &b| {
            let key_a = (std::cmp::Reverse(self.table.content(a).len()), self.table.content(a));
            let key_b = (std::cmp::Reverse(self.table.content(b).len()), self.table.content(b));
            key_a.cmp(&key_b)
        });
        ids
    }

    fn id_of(&self, s: &[u8]) -> u32 {
        self.table.id_of(s).expect("substring must already be interned")
    }

    /// Builds the trivial solution: a walk that concatenates the inputs in order, reusing
    /// consecutive-pair overlaps to skip redundant prefix walks.
    pub fn construct_trivial_graph(&mut self, strings: &[String]) -> Result<()> {
        let n = strings.len();
        let mut cur_overlap = 0usize;

        for i in 0..n {
            let bytes = strings[i].as_bytes();

            for j in cur_overlap..bytes.len() {
                let from = self.id_of(&bytes[..j]);
                let to = self.id_of(&bytes[..j + 1]);
                self.add_edge_copies(from, to, 1);
            }

            let next_overlap = if i + 1 != n {
                overlap(&strings[i], &strings[i + 1])?
            } else {
                0
            };

            let mut j = bytes.len();
            while j > next_overlap {
                let from = self.id_of(&bytes[bytes.len() - j..]);
                let to = if j == 1 {
                    self.table.epsilon()
                } else {
                    self.id_of(&bytes[bytes.len() - j + 1..])
                };
                self.add_edge_copies(from, to, 1);
                j -= 1;
            }

            cur_overlap = next_overlap;
        }

        Ok(())
    }

    /// Builds a greedy solution using the Greedy Hierarchical Algorithm.
    pub fn construct_greedy_graph(&mut self, strings: &[String]) -> Result<()> {
        let contents = self.table.contents().to_vec();
        let mut dsu = Dsu::new(&contents);

        for s in strings {
            let v = self.id_of(s.as_bytes());
            let prefix = self.table.prefix_id(v).expect("input string has a prefix");
            let suffix = self.table.suffix_id(v).expect("input string has a suffix");
            self.add_edge_copies(prefix, v, 1);
            self.add_edge_copies(v, suffix, 1);
            dsu.union(prefix, v, &contents);
            dsu.union(v, suffix, &contents);
        }

        let epsilon = self.table.epsilon();
        for v in self.node_order_excluding_epsilon() {
            if self.is_isolated(v) {
                continue;
            }

            let indeg = self.indeg_one_longer(v);
            let outdeg = self.outdeg_one_longer(v);

            if indeg > outdeg {
                let suffix = self.table.suffix_id(v).expect("non-epsilon node has a suffix");
                self.add_edge_copies(v, suffix, indeg - outdeg);
                dsu.union(v, suffix, &contents);
            } else if outdeg > indeg {
                let prefix = self.table.prefix_id(v).expect("non-epsilon node has a prefix");
                self.add_edge_copies(prefix, v, outdeg - indeg);
                dsu.union(prefix, v, &contents);
            } else {
                let node_par = dsu.find(v);
                let eps_par = dsu.find(epsilon);
                if node_par != eps_par && dsu.representative(node_par, &contents) == v {
                    let prefix = self.table.prefix_id(v).expect("non-epsilon node has a prefix");
                    let suffix = self.table.suffix_id(v).expect("non-epsilon node has a suffix");
                    self.add_edge_copies(prefix, v, 1);
                    self.add_edge_copies(v, suffix, 1);
                    dsu.union(prefix, v, &contents);
                    dsu.union(v, suffix, &contents);
                }
            }
        }

        Ok(())
    }

    /// Doubles every edge, then collapses redundant length-1 detours while preserving
    /// connectivity to ε and the fact that input nodes are never left isolated.
    pub fn double_and_collapse(&mut self, strings: &[String]) -> Result<()> {
        let doubled: Vec<(u32, u32, u32)> = self
            .out_edges
            .iter()
            .enumerate()
            .flat_map(|(u, map)| map.iter().map(move |(&v, &m)| (u as u32, v, m)))
            .collect();
        for (u, v, mult) in doubled {
            self.add_edge_copies(u, v, mult);
        }

        let contents = self.table.contents().to_vec();
        let mut dsu = Dsu::new(&contents);
        let input_ids: HashSet<u32> = strings.iter().map(|s| self.id_of(s.as_bytes())).collect();
        let epsilon = self.table.epsilon();

        for v in self.node_order_excluding_epsilon() {
            let len_v = self.table.content(v).len();

            let prev = self.table.prefix_id(v).expect("non-epsilon node has a prefix");
            let suff = self.table.suffix_id(v).expect("non-epsilon node has a suffix");
            let prev_suff = if len_v == 1 {
                epsilon
            } else {
                self.table.suffix_id(prev).expect("multi-byte node's prefix has a suffix")
            };

            while self.has_edge(prev, v) && self.has_edge(v, suff) {
                if self.multiplicity(prev, v) == 1 && self.multiplicity(v, suff) == 1 {
                    let is_input = input_ids.contains(&v);
                    let node_par = dsu.find(v);
                    let is_anchor = self.degree(v) != 2 && dsu.representative(node_par, &contents) == v;
                    if is_input || is_anchor {
                        break;
                    }
                }

                self.remove_edge_copy(prev, v);
                self.remove_edge_copy(v, suff);
                if len_v > 1 {
                    self.add_edge_copies(prev, prev_suff, 1);
                    self.add_edge_copies(prev_suff, suff, 1);
                }
            }

            if self.has_edge(prev, v) {
                dsu.union(prev, v, &contents);
            }
            if self.has_edge(v, suff) {
                dsu.union(v, suff, &contents);
            }
        }

        Ok(())
    }

    /// Rank used to break ties the same way `networkx`'s node-insertion order would:
    /// `HierarchicalGraph.__init__` (`original_source/src/hierarchical.py`) adds every substring
    /// node first, in `SubstringTable::build`'s own nested-loop order, and calls
    /// `self.graph.add_node('')` only at the very end — so ε sorts *last*, not first, even though
    /// `SubstringTable` interns it as id 0 for convenience elsewhere in this module.
    fn node_rank(&self, id: u32) -> u32 {
        let epsilon = self.table.epsilon();
        if id == epsilon {
            self.table.len() as u32 - 1
        } else if id < epsilon {
            id
        } else {
            id - 1
        }
    }

    /// Extracts an Eulerian circuit starting at ε and renders it as a superstring: each edge that
    /// ascends in length contributes the last byte of its target; descending edges contribute
    /// nothing. Undefined behaviour (reported as `Unreachable`) if the graph is not balanced and
    /// connected from ε, which only happens if it wasn't built via one of this type's
    /// constructors.
    ///
    /// `networkx.eulerian_path` (what `original_source/src/hierarchical.py`'s `to_string` calls)
    /// does not walk the forward graph: for a directed multigraph it reverses the graph first and
    /// runs Hierholzer's algorithm over *that*, picking each vertex's lowest-node-rank remaining
    /// in-edge at every step; yielding consecutive stack-pops directly (no final reversal) then
    /// reconstructs the forward circuit. Reproduced here over `in_edges` rather than `out_edges`,
    /// breaking ties by [`Self::node_rank`] instead of the forward adjacency order a naive
    /// same-direction Hierholzer walk would use — the two give different (though both valid)
    /// superstrings whenever a vertex has more than one remaining choice.
    pub fn to_superstring(&self) -> Result<String> {
        let start = self.table.epsilon();
        let mut remaining_in = self.in_edges.clone();

        let mut stack = vec![start];
        let mut last_vertex: Option<u32> = None;
        let mut circuit_edges: Vec<(u32, u32)> = Vec::new();

        while let Some(&current) = stack.last() {
            let next_pred = remaining_in[current as usize]
                .iter()
                .filter(|&(_, &m)| m > 0)
                .map(|(&u, _)| u)
                .min_by_key(|&u| self.node_rank(u));

            match next_pred {
                Some(u) => {
                    *remaining_in[current as usize].get_mut(&u).unwrap() -= 1;
                    stack.push(u);
                }
                None => {
                    if let Some(last) = last_vertex {
                        circuit_edges.push((last, current));
                    }
                    last_vertex = Some(current);
                    stack.pop();
                }
            }
        }

        if circuit_edges.is_empty() || circuit_edges[0].0 != start {
            return Err(SspError::unreachable(
                "hierarchical graph's eulerian circuit did not start and close at epsilon",
            ));
        }

        let mut result = Vec::new();
        for &(u, w) in &circuit_edges {
            let len_u = self.table.content(u).len();
            let content_w = self.table.content(w);
            if len_u < content_w.len() {
                result.push(content_w[content_w.len() - 1]);
            }
        }
        Ok(String::from_utf8_lossy(&result).into_owned())
    }

    /// True iff every vertex has equal in- and out-degree, the Eulerian-circuit precondition that
    /// `construct_trivial_graph` and `construct_greedy_graph` are expected to maintain.
    pub fn is_balanced(&self) -> bool {
        (0..self.table.len() as u32).all(|v| {
            let out: u32 = self.out_edges[v as usize].values().sum();
            let inn: u32 = self.in_edges[v as usize].values().sum();
            out == inn
        })
    }

    /// True iff every vertex with at least one incident edge is weakly connected to ε — i.e. ε's
    /// component is the only non-trivial (more-than-one-vertex) component in the graph.
    pub fn epsilon_component_is_unique_nontrivial(&self) -> bool {
        let n = self.table.len();
        let epsilon = self.table.epsilon() as usize;
        let mut visited = vec![false; n];
        let mut stack = vec![epsilon];
        visited[epsilon] = true;
        while let Some(v) = stack.pop() {
            for &w in self.out_edges[v].keys() {
                if !visited[w as usize] {
                    visited[w as usize] = true;
                    stack.push(w);
                }
            }
            for &u in self.in_edges[v].keys() {
                if !visited[u as usize] {
                    visited[u as usize] = true;
                    stack.push(u);
                }
            }
        }
        (0..n).all(|v| visited[v] || self.is_isolated(v as u32))
    }

    /// The full edge multiset as `(source, target, multiplicity)` byte-string triples, used by
    /// [`equal_graphs`] to compare two graphs independent of their internal id assignment.
    fn edge_multiset(&self) -> Vec<(Vec<u8>, Vec<u8>, u32)> {
        self.out_edges
            .iter()
            .enumerate()
            .flat_map(|(u, map)| {
                let table = &self.table;
                map.iter()
                    .map(move |(&v, &m)| (table.content(u as u32).to_vec(), table.content(v).to_vec(), m))
            })
            .collect()
    }
}

/// Solves the given SSP instance with the Greedy Hierarchical Algorithm.
pub fn gha(strings: &[String]) -> Result<String> {
    validate_solver_input(strings)?;
    let mut hg = HierarchicalGraph::new(strings);
    hg.construct_greedy_graph(strings)?;
    hg.to_superstring()
}

/// Solves the given SSP instance with the Collapsing Algorithm applied to the trivial solution.
pub fn ca(strings: &[String]) -> Result<String> {
    validate_solver_input(strings)?;
    let mut hg = HierarchicalGraph::new(strings);
    hg.construct_trivial_graph(strings)?;
    hg.double_and_collapse(strings)?;
    hg.to_superstring()
}

/// Diagnostic predicate for validating the Collapsing Conjecture: true iff CA applied to the GHA
/// solution leaves the multigraph unchanged (identical edge multiset). Intended for the
/// test/experiment driver, not the solve path itself.
pub fn equal_graphs(a: &HierarchicalGraph, b: &HierarchicalGraph) -> bool {
    let mut ea = a.edge_multiset();
    let mut eb = b.edge_multiset();
    ea.sort();
    eb.sort();
    ea == eb
}
