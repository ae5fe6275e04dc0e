//! Breadth-first and depth-first search over a graph
//!
//! Both searchers walk from a start node along edges passing an edge
//! filter until a node predicate accepts, returning the first accepted
//! node. The visited set is a flat bool vector indexed by node id and is
//! reusable across searches via [`BreadthFirst::reset`] /
//! [`DepthFirst::reset`].

use std::collections::VecDeque;

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Node, NodeId, Undirected};

fn mark(visits: &mut Vec<bool>, id: NodeId) {
    if id >= visits.len() {
        visits.resize(id + 1, false);
    }
    visits[id] = true;
}

fn visited(visits: &[bool], id: NodeId) -> bool {
    visits.get(id).copied().unwrap_or(false)
}

/// A breadth-first searcher over a graph.
#[derive(Debug, Clone, Default)]
pub struct BreadthFirst {
    queue: VecDeque<NodeId>,
    visits: Vec<bool>,
}

impl BreadthFirst {
    /// Create a new breadth-first searcher.
    pub fn new() -> BreadthFirst {
        BreadthFirst::default()
    }

    /// Search `g` from `start`, traversing edges for which `edge_filter`
    /// answers true, until `accept` answers true for a node. The start
    /// node itself is tested first. Fails with `TargetNotFound` when the
    /// reachable component is exhausted without a match.
    pub fn search<EF, NF>(
        &mut self,
        g: &Undirected,
        start: NodeId,
        edge_filter: EF,
        accept: NF,
    ) -> Result<NodeId>
    where
        EF: Fn(&Edge) -> bool,
        NF: Fn(&Node) -> bool,
    {
        self.queue.push_back(start);
        mark(&mut self.visits, start);
        while let Some(t) = self.queue.pop_front() {
            let Some(node) = g.node(t) else { continue };
            if accept(node) {
                return Ok(t);
            }
            for n in g.neighbors(t, &edge_filter) {
                if !self.visited(n) {
                    mark(&mut self.visits, n);
                    self.queue.push_back(n);
                }
            }
        }

        Err(GraphError::TargetNotFound)
    }

    /// Whether the searcher has visited the node. Out-of-range ids answer
    /// false.
    pub fn visited(&self, id: NodeId) -> bool {
        visited(&self.visits, id)
    }

    /// Clear the search queue and visited list for reuse.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.visits.clear();
    }
}

/// A depth-first searcher over a graph.
#[derive(Debug, Clone, Default)]
pub struct DepthFirst {
    stack: Vec<NodeId>,
    visits: Vec<bool>,
}

impl DepthFirst {
    /// Create a new depth-first searcher.
    pub fn new() -> DepthFirst {
        DepthFirst::default()
    }

    /// Search `g` from `start`, traversing edges for which `edge_filter`
    /// answers true, until `accept` answers true for a node. The start
    /// node itself is tested first. Fails with `TargetNotFound` when the
    /// reachable component is exhausted without a match.
    pub fn search<EF, NF>(
        &mut self,
        g: &Undirected,
        start: NodeId,
        edge_filter: EF,
        accept: NF,
    ) -> Result<NodeId>
    where
        EF: Fn(&Edge) -> bool,
        NF: Fn(&Node) -> bool,
    {
        self.stack.push(start);
        mark(&mut self.visits, start);
        while let Some(t) = self.stack.pop() {
            let Some(node) = g.node(t) else { continue };
            if accept(node) {
                return Ok(t);
            }
            for n in g.neighbors(t, &edge_filter) {
                if !self.visited(n) {
                    mark(&mut self.visits, n);
                    self.stack.push(n);
                }
            }
        }

        Err(GraphError::TargetNotFound)
    }

    /// Whether the searcher has visited the node. Out-of-range ids answer
    /// false.
    pub fn visited(&self, id: NodeId) -> bool {
        visited(&self.visits, id)
    }

    /// Clear the search stack and visited list for reuse.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.visits.clear();
    }
}
