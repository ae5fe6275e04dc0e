//! Undirected weighted multigraph with stable integer identifiers
//!
//! The graph owns its nodes and edges. Both live in slot tables addressable
//! by id, alongside compact lists that make iteration and counting O(1) per
//! element; removal swaps the last element into the vacated position and
//! fixes up the moved element's dense index. Parallel edges and self-loops
//! are allowed.
//!
//! # Example
//!
//! ```rust
//! use randcut::graph::{EdgeFlags, Undirected};
//!
//! let mut g = Undirected::new();
//! let e = g.connect(0, 1, 2.5, EdgeFlags::NONE).unwrap();
//! g.connect(1, 2, 1.0, EdgeFlags::NONE).unwrap();
//!
//! assert_eq!(g.order(), 3);
//! assert_eq!(g.size(), 2);
//! assert_eq!(g.edge(e).unwrap().weight(), 2.5);
//! assert_eq!(g.neighbors(1, |_| true), vec![0, 2]);
//! ```

mod edge;
mod node;

pub use edge::{Edge, EdgeFlags};
pub use node::{Hop, Node};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GraphError, Result};

/// Stable node identifier; also the node's slot in the graph's node table.
pub type NodeId = usize;

/// Stable edge identifier; also the edge's slot in the graph's edge table.
pub type EdgeId = usize;

/// Edge weight type.
pub type Weight = f64;

/// Largest admissible node id. Ids index dense slot tables, so the id
/// space is bounded.
pub const MAX_NODE_ID: NodeId = (1 << 32) - 1;

/// Largest admissible edge id.
pub const MAX_EDGE_ID: EdgeId = (1 << 32) - 1;

/// Dense index of an element that is not in a graph.
pub(crate) const INVALID_INDEX: usize = usize::MAX;

/// Statistics about a graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of nodes in the graph
    pub order: usize,
    /// Number of edges in the graph
    pub size: usize,
    /// Sum of all edge weights
    pub total_weight: f64,
    /// Minimum node degree
    pub min_degree: usize,
    /// Maximum node degree
    pub max_degree: usize,
    /// Average node degree
    pub avg_degree: f64,
}

/// An undirected weighted multigraph.
#[derive(Debug, Clone, Default)]
pub struct Undirected {
    /// Node slot table, addressable by node id.
    nodes: Vec<Option<Node>>,
    /// Compact list of live node ids; `Node::index` points into it.
    node_list: Vec<NodeId>,
    /// Edge slot table, addressable by edge id.
    edges: Vec<Option<Edge>>,
    /// Compact list of live edge ids; `Edge::index` points into it.
    edge_list: Vec<EdgeId>,
    next_node_id: NodeId,
    next_edge_id: EdgeId,
}

impl Undirected {
    /// Create a new empty graph.
    pub fn new() -> Undirected {
        Undirected::default()
    }

    /// Create with capacity hints for node and edge counts.
    pub fn with_capacity(nodes: usize, edges: usize) -> Undirected {
        Undirected {
            nodes: Vec::with_capacity(nodes),
            node_list: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            edge_list: Vec::with_capacity(edges),
            next_node_id: 0,
            next_edge_id: 0,
        }
    }

    /// Number of nodes in the graph.
    pub fn order(&self) -> usize {
        self.node_list.len()
    }

    /// Number of edges in the graph.
    pub fn size(&self) -> usize {
        self.edge_list.len()
    }

    /// One past the highest node id ever present in the graph. Overlay
    /// structures sized by this value can index by any node id.
    pub fn next_node_id(&self) -> NodeId {
        self.next_node_id
    }

    /// One past the highest edge id ever present in the graph.
    pub fn next_edge_id(&self) -> EdgeId {
        self.next_edge_id
    }

    /// Add a node with a fresh id and return the id.
    ///
    /// # Panics
    ///
    /// Panics if the id space is exhausted, which requires [`MAX_NODE_ID`]
    /// nodes to have been created.
    pub fn add_node(&mut self) -> NodeId {
        self.add_id(self.next_node_id).expect("node id space exhausted")
    }

    /// Ensure a node with id `id` exists, creating it if absent, and
    /// return the id. Idempotent; the only way a previously removed id
    /// comes back into use.
    pub fn add_id(&mut self, id: NodeId) -> Result<NodeId> {
        if id > MAX_NODE_ID {
            return Err(GraphError::NodeIdOutOfRange(id));
        }
        if self.nodes.len() <= id {
            self.nodes.resize_with(id + 1, || None);
        }
        if self.nodes[id].is_none() {
            let index = self.node_list.len();
            self.node_list.push(id);
            self.nodes[id] = Some(Node {
                id,
                index,
                edges: Vec::new(),
            });
            if id >= self.next_node_id {
                self.next_node_id = id + 1;
            }
        }
        Ok(id)
    }

    /// Create an edge between `u` and `v`, adding the endpoints to the
    /// graph as needed, and return the new edge's id. `u == v` creates a
    /// self-loop, which appears once in the node's incidence list.
    pub fn connect(&mut self, u: NodeId, v: NodeId, weight: Weight, flags: EdgeFlags) -> Result<EdgeId> {
        let id = self.next_edge_id;
        self.new_edge_keep_id(id, u, v, weight, flags)
    }

    /// Append an edge preserving an externally chosen id.
    fn new_edge_keep_id(
        &mut self,
        id: EdgeId,
        u: NodeId,
        v: NodeId,
        weight: Weight,
        flags: EdgeFlags,
    ) -> Result<EdgeId> {
        if id > MAX_EDGE_ID {
            return Err(GraphError::EdgeIdOutOfRange(id));
        }
        debug_assert!(weight.is_finite() && weight >= 0.0);
        self.add_id(u)?;
        self.add_id(v)?;

        if self.edges.len() <= id {
            self.edges.resize_with(id + 1, || None);
        }
        debug_assert!(self.edges[id].is_none());

        let mut e = Edge::detached(id, weight, flags);
        e.connect(u)?;
        e.connect(v)?;
        e.index = self.edge_list.len();
        self.edge_list.push(id);
        self.edges[id] = Some(e);
        if id >= self.next_edge_id {
            self.next_edge_id = id + 1;
        }

        self.nodes[u].as_mut().expect("endpoint just added").add(id);
        if v != u {
            self.nodes[v].as_mut().expect("endpoint just added").add(id);
        }
        Ok(id)
    }

    /// Remove a node and every edge incident on it. Returns the removed
    /// node, or `None` if no node with that id is in the graph.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let mut node = self.nodes.get_mut(id)?.take()?;

        for &eid in &node.edges {
            let mut e = self.edges[eid].take().expect("incidence lists a live edge");
            let (u, v) = e.nodes();
            let other = if u == id { v } else { u };
            if other != id {
                self.nodes[other]
                    .as_mut()
                    .expect("endpoint of a live edge is live")
                    .drop_edge(eid);
            }
            e.disconnect(id);
            self.unlink_edge(e.index);
        }
        node.drop_all();

        let index = node.index;
        self.node_list.swap_remove(index);
        if index < self.node_list.len() {
            let moved = self.node_list[index];
            self.nodes[moved]
                .as_mut()
                .expect("compact list tracks live nodes")
                .index = index;
        }
        node.index = INVALID_INDEX;
        Some(node)
    }

    /// Remove an edge. Returns the removed edge, or `None` if no edge
    /// with that id is in the graph.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let mut e = self.edges.get_mut(id)?.take()?;
        let (u, v) = e.nodes();
        self.nodes[u]
            .as_mut()
            .expect("endpoint of a live edge is live")
            .drop_edge(id);
        if v != u {
            self.nodes[v]
                .as_mut()
                .expect("endpoint of a live edge is live")
                .drop_edge(id);
        }
        self.unlink_edge(e.index);
        e.index = INVALID_INDEX;
        Some(e)
    }

    /// Swap-with-last removal from the compact edge list, fixing up the
    /// moved survivor's index.
    fn unlink_edge(&mut self, index: usize) {
        self.edge_list.swap_remove(index);
        if index < self.edge_list.len() {
            let moved = self.edge_list[index];
            self.edges[moved]
                .as_mut()
                .expect("compact list tracks live edges")
                .index = index;
        }
    }

    /// Look up a node by id. Out-of-range ids answer `None`.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)?.as_ref()
    }

    /// Look up an edge by id. Out-of-range ids answer `None`.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)?.as_ref()
    }

    /// Iterate over the nodes of the graph.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.node_list
            .iter()
            .map(move |&id| self.nodes[id].as_ref().expect("compact list tracks live nodes"))
    }

    /// Iterate over the edges of the graph.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edge_list
            .iter()
            .map(move |&id| self.edges[id].as_ref().expect("compact list tracks live edges"))
    }

    /// Replace the weight of an edge. Answers whether the edge exists.
    pub fn set_weight(&mut self, id: EdgeId, weight: Weight) -> bool {
        match self.edges.get_mut(id).and_then(Option::as_mut) {
            Some(e) => {
                e.weight = weight;
                true
            }
            None => false,
        }
    }

    /// Replace the flags of an edge. Answers whether the edge exists.
    pub fn set_flags(&mut self, id: EdgeId, flags: EdgeFlags) -> bool {
        match self.edges.get_mut(id).and_then(Option::as_mut) {
            Some(e) => {
                e.flags = flags;
                true
            }
            None => false,
        }
    }

    /// Degree of a node; self-loops are counted at both ends. Dead ids
    /// have degree 0.
    pub fn degree(&self, id: NodeId) -> usize {
        let Some(n) = self.node(id) else { return 0 };
        let loops = n
            .edges
            .iter()
            .filter(|&&eid| {
                let e = self.edges[eid].as_ref().expect("incidence lists a live edge");
                e.tail() == e.head()
            })
            .count();
        n.edges.len() + loops
    }

    /// Nodes sharing an edge with `id` through edges passing `filter`.
    /// Multiply connected nodes repeat once per connecting edge; a
    /// self-loop yields the node itself.
    pub fn neighbors<F>(&self, id: NodeId, filter: F) -> Vec<NodeId>
    where
        F: Fn(&Edge) -> bool,
    {
        let Some(n) = self.node(id) else { return Vec::new() };
        let mut out = Vec::new();
        for &eid in &n.edges {
            let e = self.edges[eid].as_ref().expect("incidence lists a live edge");
            if filter(e) {
                let t = e.tail();
                out.push(if t == id { e.head() } else { t });
            }
        }
        out
    }

    /// Same as [`neighbors`](Undirected::neighbors), additionally
    /// reporting the connecting edge of each neighbor.
    pub fn hops<F>(&self, id: NodeId, filter: F) -> Vec<Hop>
    where
        F: Fn(&Edge) -> bool,
    {
        let Some(n) = self.node(id) else { return Vec::new() };
        let mut out = Vec::new();
        for &eid in &n.edges {
            let e = self.edges[eid].as_ref().expect("incidence lists a live edge");
            if filter(e) {
                let t = e.tail();
                out.push(Hop {
                    edge: eid,
                    node: if t == id { e.head() } else { t },
                });
            }
        }
        out
    }

    /// Re-home the edges of the given node set into a new graph. Edges
    /// are deduplicated by id; weights and flags are preserved. Endpoints
    /// outside the set are pulled into the new graph as well. With
    /// `compact` set, edge ids are renumbered densely from zero instead
    /// of being carried over.
    pub fn build_undirected(&self, ids: &[NodeId], compact: bool) -> Result<Undirected> {
        let mut g = Undirected::with_capacity(ids.len(), self.size());
        let mut seen: HashSet<EdgeId> = HashSet::new();
        for &nid in ids {
            let Some(n) = self.node(nid) else { continue };
            g.add_id(nid)?;
            for &eid in n.edges() {
                if !seen.insert(eid) {
                    continue;
                }
                let e = self.edges[eid].as_ref().expect("incidence lists a live edge");
                let (u, v) = e.nodes();
                if compact {
                    let id = g.next_edge_id;
                    g.new_edge_keep_id(id, u, v, e.weight(), e.flags())?;
                } else {
                    g.new_edge_keep_id(eid, u, v, e.weight(), e.flags())?;
                }
            }
        }
        debug!(order = g.order(), size = g.size(), compact, "rebuilt undirected graph");
        Ok(g)
    }

    /// Summary statistics for the graph.
    pub fn stats(&self) -> GraphStats {
        let order = self.order();
        let size = self.size();
        if order == 0 {
            return GraphStats::default();
        }

        let mut min_degree = usize::MAX;
        let mut max_degree = 0;
        let mut total_degree = 0;
        for &id in &self.node_list {
            let d = self.degree(id);
            min_degree = min_degree.min(d);
            max_degree = max_degree.max(d);
            total_degree += d;
        }
        let total_weight = self.edges().map(Edge::weight).sum();

        GraphStats {
            order,
            size,
            total_weight,
            min_degree,
            max_degree,
            avg_degree: total_degree as f64 / order as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any(_: &Edge) -> bool {
        true
    }

    #[test]
    fn test_empty_graph() {
        let g = Undirected::new();
        assert_eq!(g.order(), 0);
        assert_eq!(g.size(), 0);
        assert_eq!(g.next_node_id(), 0);
        assert!(g.node(0).is_none());
        assert!(g.edge(0).is_none());
    }

    #[test]
    fn test_add_id_idempotent() {
        let mut g = Undirected::new();
        assert_eq!(g.add_id(4).unwrap(), 4);
        assert_eq!(g.add_id(4).unwrap(), 4);
        assert_eq!(g.order(), 1);
        assert_eq!(g.next_node_id(), 5);

        // fresh ids continue past the highest explicit id
        assert_eq!(g.add_node(), 5);
        assert_eq!(g.next_node_id(), 6);
    }

    #[test]
    fn test_add_id_out_of_range() {
        let mut g = Undirected::new();
        assert_eq!(
            g.add_id(MAX_NODE_ID + 1),
            Err(GraphError::NodeIdOutOfRange(MAX_NODE_ID + 1))
        );
    }

    #[test]
    fn test_connect_adds_endpoints() {
        let mut g = Undirected::new();
        let e = g.connect(1, 3, 2.0, EdgeFlags::NONE).unwrap();
        assert_eq!(g.order(), 2);
        assert_eq!(g.size(), 1);
        assert_eq!(g.edge(e).unwrap().nodes(), (1, 3));
        assert_eq!(g.edge(e).unwrap().weight(), 2.0);
        assert_eq!(g.next_node_id(), 4);
        assert_eq!(g.next_edge_id(), 1);
    }

    #[test]
    fn test_incidence_symmetry() {
        let mut g = Undirected::new();
        g.connect(0, 1, 1.0, EdgeFlags::NONE).unwrap();
        g.connect(1, 2, 1.0, EdgeFlags::NONE).unwrap();
        g.connect(0, 2, 1.0, EdgeFlags::NONE).unwrap();

        for e in g.edges() {
            let (u, v) = e.nodes();
            assert!(g.node(u).unwrap().edges().contains(&e.id()));
            if u != v {
                assert!(g.node(v).unwrap().edges().contains(&e.id()));
            }
        }
    }

    #[test]
    fn test_multi_edges() {
        let mut g = Undirected::new();
        g.connect(0, 1, 1.0, EdgeFlags::NONE).unwrap();
        g.connect(0, 1, 2.0, EdgeFlags::NONE).unwrap();
        assert_eq!(g.size(), 2);
        assert_eq!(g.degree(0), 2);
        assert_eq!(g.neighbors(0, any), vec![1, 1]);
    }

    #[test]
    fn test_self_loop() {
        let mut g = Undirected::new();
        let e = g.connect(0, 0, 5.0, EdgeFlags::NONE).unwrap();
        // once in the incidence list, twice in the degree
        assert_eq!(g.node(0).unwrap().edges(), &[e]);
        assert_eq!(g.degree(0), 2);
        assert_eq!(g.neighbors(0, any), vec![0]);
    }

    #[test]
    fn test_neighbors_filter_cut_flag() {
        let mut g = Undirected::new();
        g.connect(0, 1, 1.0, EdgeFlags::NONE).unwrap();
        let cut = g.connect(0, 2, 1.0, EdgeFlags::NONE).unwrap();
        g.set_flags(cut, EdgeFlags::CUT);

        let ns = g.neighbors(0, |e| !e.flags().contains(EdgeFlags::CUT));
        assert_eq!(ns, vec![1]);
    }

    #[test]
    fn test_hops_report_the_traversing_edge() {
        let mut g = Undirected::new();
        let e0 = g.connect(0, 1, 1.0, EdgeFlags::NONE).unwrap();
        let e1 = g.connect(0, 2, 1.0, EdgeFlags::NONE).unwrap();

        let hops = g.hops(0, any);
        assert_eq!(hops.len(), 2);
        assert_eq!(hops[0], Hop { edge: e0, node: 1 });
        assert_eq!(hops[1], Hop { edge: e1, node: 2 });
    }

    #[test]
    fn test_remove_edge() {
        let mut g = Undirected::new();
        let a = g.connect(0, 1, 1.0, EdgeFlags::NONE).unwrap();
        let b = g.connect(1, 2, 2.0, EdgeFlags::NONE).unwrap();
        let c = g.connect(2, 0, 3.0, EdgeFlags::NONE).unwrap();

        let removed = g.remove_edge(a).unwrap();
        assert_eq!(removed.weight(), 1.0);
        assert_eq!(g.size(), 2);
        assert!(g.edge(a).is_none());
        assert!(!g.node(0).unwrap().edges().contains(&a));
        assert!(!g.node(1).unwrap().edges().contains(&a));

        // removing again is a safe no-op
        assert!(g.remove_edge(a).is_none());
        assert!(g.edge(b).is_some());
        assert!(g.edge(c).is_some());
    }

    #[test]
    fn test_remove_node_drops_incident_edges() {
        let mut g = Undirected::new();
        let a = g.connect(0, 1, 1.0, EdgeFlags::NONE).unwrap();
        let b = g.connect(1, 2, 1.0, EdgeFlags::NONE).unwrap();
        let c = g.connect(0, 2, 1.0, EdgeFlags::NONE).unwrap();

        let removed = g.remove_node(1).unwrap();
        assert_eq!(removed.id(), 1);
        assert_eq!(g.order(), 2);
        assert_eq!(g.size(), 1);
        assert!(g.edge(a).is_none());
        assert!(g.edge(b).is_none());
        assert!(g.edge(c).is_some());
        assert_eq!(g.node(0).unwrap().edges(), &[c]);
        assert_eq!(g.node(2).unwrap().edges(), &[c]);

        assert!(g.remove_node(1).is_none());
    }

    #[test]
    fn test_remove_node_with_self_loop() {
        let mut g = Undirected::new();
        g.connect(0, 0, 5.0, EdgeFlags::NONE).unwrap();
        g.connect(0, 1, 1.0, EdgeFlags::NONE).unwrap();

        g.remove_node(0).unwrap();
        assert_eq!(g.order(), 1);
        assert_eq!(g.size(), 0);
        assert!(g.node(1).unwrap().edges().is_empty());
    }

    #[test]
    fn test_compact_indices_after_mutation() {
        let mut g = Undirected::new();
        let mut eids = Vec::new();
        for i in 0..6 {
            eids.push(g.connect(i, (i + 1) % 6, 1.0, EdgeFlags::NONE).unwrap());
        }
        g.remove_edge(eids[1]);
        g.remove_edge(eids[4]);
        g.remove_node(3);

        assert_eq!(g.nodes().count(), g.order());
        assert_eq!(g.edges().count(), g.size());
        for (pos, &id) in g.node_list.iter().enumerate() {
            assert_eq!(g.nodes[id].as_ref().unwrap().index, pos);
        }
        for (pos, &id) in g.edge_list.iter().enumerate() {
            assert_eq!(g.edges[id].as_ref().unwrap().index, pos);
        }
    }

    #[test]
    fn test_id_reuse_only_via_add_id() {
        let mut g = Undirected::new();
        g.add_id(2).unwrap();
        g.remove_node(2);
        // a fresh id never reuses the removed slot
        assert_eq!(g.add_node(), 3);
        // explicit add_id does
        assert_eq!(g.add_id(2).unwrap(), 2);
        assert!(g.node(2).is_some());
    }

    #[test]
    fn test_set_weight_and_flags() {
        let mut g = Undirected::new();
        let e = g.connect(0, 1, 1.0, EdgeFlags::NONE).unwrap();
        assert!(g.set_weight(e, 4.0));
        assert!(g.set_flags(e, EdgeFlags::CUT));
        assert_eq!(g.edge(e).unwrap().weight(), 4.0);
        assert!(g.edge(e).unwrap().flags().contains(EdgeFlags::CUT));

        assert!(!g.set_weight(99, 1.0));
        assert!(!g.set_flags(99, EdgeFlags::NONE));
    }

    #[test]
    fn test_build_undirected_round_trip() {
        let mut g = Undirected::new();
        g.connect(0, 1, 1.5, EdgeFlags::NONE).unwrap();
        g.connect(1, 2, 2.5, EdgeFlags::CUT).unwrap();
        g.connect(2, 0, 3.5, EdgeFlags::NONE).unwrap();
        g.connect(2, 2, 0.5, EdgeFlags::NONE).unwrap();

        let ids: Vec<NodeId> = g.nodes().map(Node::id).collect();
        let rebuilt = g.build_undirected(&ids, false).unwrap();

        assert_eq!(rebuilt.order(), g.order());
        assert_eq!(rebuilt.size(), g.size());
        for e in g.edges() {
            let re = rebuilt.edge(e.id()).expect("edge id preserved");
            assert_eq!(re.weight(), e.weight());
            assert_eq!(re.flags(), e.flags());
            let (u, v) = e.nodes();
            let (ru, rv) = re.nodes();
            assert_eq!((ru, rv), (u, v));
        }
        for n in g.nodes() {
            let mut a = n.edges().to_vec();
            let mut b = rebuilt.node(n.id()).unwrap().edges().to_vec();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_build_undirected_compact_renumbers() {
        let mut g = Undirected::new();
        g.connect(0, 1, 1.0, EdgeFlags::NONE).unwrap();
        let dropped = g.connect(1, 2, 1.0, EdgeFlags::NONE).unwrap();
        g.connect(2, 0, 1.0, EdgeFlags::NONE).unwrap();
        g.remove_edge(dropped);

        let ids: Vec<NodeId> = g.nodes().map(Node::id).collect();
        let rebuilt = g.build_undirected(&ids, true).unwrap();
        assert_eq!(rebuilt.size(), 2);
        assert_eq!(rebuilt.next_edge_id(), 2);
        assert!(rebuilt.edge(0).is_some());
        assert!(rebuilt.edge(1).is_some());
    }

    #[test]
    fn test_build_undirected_pulls_outside_endpoints() {
        let mut g = Undirected::new();
        g.connect(0, 1, 1.0, EdgeFlags::NONE).unwrap();
        let sub = g.build_undirected(&[0], false).unwrap();
        assert_eq!(sub.order(), 2);
        assert!(sub.node(1).is_some());
    }

    #[test]
    fn test_stats() {
        let mut g = Undirected::new();
        g.connect(0, 1, 1.0, EdgeFlags::NONE).unwrap();
        g.connect(1, 2, 2.0, EdgeFlags::NONE).unwrap();
        g.connect(2, 0, 3.0, EdgeFlags::NONE).unwrap();

        let stats = g.stats();
        assert_eq!(stats.order, 3);
        assert_eq!(stats.size, 3);
        assert_eq!(stats.total_weight, 6.0);
        assert_eq!(stats.min_degree, 2);
        assert_eq!(stats.max_degree, 2);
        assert_eq!(stats.avg_degree, 2.0);

        assert_eq!(Undirected::new().stats(), GraphStats::default());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut g = Undirected::new();
        g.connect(0, 1, 1.0, EdgeFlags::NONE).unwrap();
        let mut h = g.clone();
        h.connect(1, 2, 1.0, EdgeFlags::NONE).unwrap();
        assert_eq!(g.size(), 1);
        assert_eq!(h.size(), 2);
    }
}
