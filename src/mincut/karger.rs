//! Recursive contraction over a supernode overlay
//!
//! Contraction never mutates the graph: merges happen in an overlay of
//! supernode labels sized by the graph's id space, so any number of
//! contexts can contract the same shared graph concurrently. Each context
//! owns its overlay, its selector and its random stream.

use std::f64::consts::SQRT_2;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::{Edge, EdgeId, NodeId, Undirected};
use crate::mincut::Cut;
use crate::select::{Selector, WeightedItem};

/// Contraction state of one original node: the label of the supernode it
/// currently belongs to, and, on representative slots, the ids merged in
/// so far. An empty member list denotes a singleton supernode.
#[derive(Debug, Clone, Default)]
pub(crate) struct Supernode {
    pub(crate) label: NodeId,
    pub(crate) members: Vec<NodeId>,
}

/// One Karger–Stein contraction context over a shared graph.
///
/// `init` must run before every trial; it restores the overlay to
/// singletons and refills the selector from the graph's edges.
pub(crate) struct KargerStein<'g> {
    g: &'g Undirected,
    order: usize,
    supers: Vec<Supernode>,
    sel: Selector,
    cut: Vec<EdgeId>,
    weight: f64,
    count: usize,
    split: usize,
    rng: StdRng,
}

impl<'g> KargerStein<'g> {
    pub(crate) fn new(g: &'g Undirected, rng: StdRng) -> KargerStein<'g> {
        KargerStein {
            g,
            order: 0,
            supers: vec![Supernode::default(); g.next_node_id()],
            sel: Selector::with_capacity(g.size()),
            cut: Vec::new(),
            weight: f64::INFINITY,
            count: 0,
            split: 0,
            rng,
        }
    }

    /// A context whose recursion may spawn parallel subcontractions until
    /// `split` levels have forked; 0 removes the bound.
    pub(crate) fn with_split(g: &'g Undirected, rng: StdRng, split: usize) -> KargerStein<'g> {
        let mut ka = KargerStein::new(g, rng);
        ka.split = split;
        ka
    }

    /// Reset the overlay and the selector for a fresh trial.
    pub(crate) fn init(&mut self) {
        self.order = self.g.order();
        for (id, s) in self.supers.iter_mut().enumerate() {
            s.label = id;
            s.members.clear();
        }
        self.sel.clear();
        for e in self.g.edges() {
            self.sel.push(WeightedItem::new(e.id(), e.weight()));
        }
        self.sel.init();
    }

    /// Deep-copy the contraction state, sharing the graph. The fork gets
    /// an independent random stream derived from this context's stream,
    /// and snapshots the current order and recursion count.
    fn fork(&mut self) -> KargerStein<'g> {
        KargerStein {
            g: self.g,
            order: self.order,
            supers: self.supers.clone(),
            sel: self.sel.clone(),
            cut: Vec::new(),
            weight: f64::INFINITY,
            count: self.count,
            split: self.split,
            rng: StdRng::seed_from_u64(self.rng.gen()),
        }
    }

    pub(crate) fn weight(&self) -> f64 {
        self.weight
    }

    /// Snapshot the current cut.
    pub(crate) fn cut(&self) -> Cut {
        Cut {
            edges: self.cut.clone(),
            weight: self.weight,
        }
    }

    /// One recursive Karger–Stein trial: contract to `ceil(order/√2 + 1)`
    /// twice independently, recurse on both, keep the lighter cut.
    pub(crate) fn fast_min_cut(&mut self) {
        if self.order <= 6 || self.sel.total() <= 0.0 {
            self.rand_compact(2);
            return;
        }

        let t = (self.order as f64 / SQRT_2 + 1.0).ceil() as usize;

        let mut other = self.fork();
        self.rand_contract(t);
        self.fast_min_cut();
        other.rand_contract(t);
        other.fast_min_cut();

        if other.weight <= self.weight {
            *self = other;
        }
    }

    /// As [`fast_min_cut`](KargerStein::fast_min_cut), spawning the two
    /// subcontractions concurrently while the split budget lasts.
    pub(crate) fn fast_min_cut_par(&mut self) {
        if self.order <= 6 || self.sel.total() <= 0.0 {
            self.rand_compact(2);
            return;
        }

        let t = (self.order as f64 / SQRT_2 + 1.0).ceil() as usize;

        let spawn = self.split == 0 || self.count < self.split;
        self.count += 1;
        let mut other = self.fork();

        if spawn {
            rayon::join(
                || {
                    self.rand_contract(t);
                    self.fast_min_cut_par();
                },
                || {
                    other.rand_contract(t);
                    other.fast_min_cut_par();
                },
            );
        } else {
            self.rand_contract(t);
            self.fast_min_cut_par();
            other.rand_contract(t);
            other.fast_min_cut_par();
        }

        if other.weight <= self.weight {
            *self = other;
        }
    }

    /// Contract supernodes until `k` remain or the selector drains. Loop
    /// edges are skipped without being re-enqueued; their weight was
    /// consumed by the draw.
    fn rand_contract(&mut self, k: usize) {
        while self.order > k {
            let id = match self.sel.select(&mut self.rng) {
                Ok(id) => id,
                Err(_) => break,
            };

            let e = self.g.edge(id).expect("selector indexes a live edge");
            if self.is_loop(e) {
                continue;
            }

            self.merge(e.head(), e.tail());
            self.order -= 1;
        }
    }

    /// Contract down to `k` supernodes, then record the surviving
    /// non-loop edges and their weight sum as the current cut.
    fn rand_compact(&mut self, k: usize) {
        self.rand_contract(k);

        self.cut.clear();
        self.weight = 0.0;
        for e in self.g.edges() {
            if self.is_loop(e) {
                continue;
            }
            self.cut.push(e.id());
            self.weight += e.weight();
        }
    }

    /// Whether the edge's endpoints already share a supernode.
    fn is_loop(&self, e: &Edge) -> bool {
        self.supers[e.head()].label == self.supers[e.tail()].label
    }

    /// Merge the supernodes of `head` and `tail`. The larger member list
    /// absorbs the smaller one, and every absorbed id is relabeled to the
    /// surviving representative, so labels stay single-hop.
    fn merge(&mut self, head: NodeId, tail: NodeId) {
        let (mut hid, mut tid) = (head, tail);
        let (mut hl, mut tl) = (self.supers[hid].label, self.supers[tid].label);
        if self.supers[hl].members.len() < self.supers[tl].members.len() {
            std::mem::swap(&mut hid, &mut tid);
            std::mem::swap(&mut hl, &mut tl);
        }

        if self.supers[hl].members.is_empty() {
            self.supers[hl].members.push(hid);
        }
        if self.supers[tl].members.is_empty() {
            self.supers[hl].members.push(tid);
        } else {
            let absorbed = std::mem::take(&mut self.supers[tl].members);
            self.supers[hl].members.extend_from_slice(&absorbed);
        }

        let label = self.supers[hid].label;
        let members = std::mem::take(&mut self.supers[hl].members);
        for &id in &members {
            self.supers[id].label = label;
        }
        self.supers[hl].members = members;
    }
}
