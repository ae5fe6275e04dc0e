//! Edge entity and edge flags

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::{EdgeId, NodeId, Weight, INVALID_INDEX};

/// Flag bits that alter how an edge is treated by caller-supplied filters.
///
/// One flag is currently defined, [`EdgeFlags::CUT`]. The edge itself never
/// enforces its flags; filters passed to neighbor iteration and traversal
/// decide what to do with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeFlags(u32);

impl EdgeFlags {
    /// No flags set.
    pub const NONE: EdgeFlags = EdgeFlags(0);
    /// Marks a temporarily cut edge so that filters can skip it.
    pub const CUT: EdgeFlags = EdgeFlags(1);

    /// Raw bit representation.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Build flags from raw bits.
    pub const fn from_bits(bits: u32) -> EdgeFlags {
        EdgeFlags(bits)
    }

    /// True when every bit of `other` is set in `self`.
    pub const fn contains(self, other: EdgeFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Set the bits of `other`.
    pub fn insert(&mut self, other: EdgeFlags) {
        self.0 |= other.0;
    }

    /// Clear the bits of `other`.
    pub fn remove(&mut self, other: EdgeFlags) {
        self.0 &= !other.0;
    }
}

impl BitOr for EdgeFlags {
    type Output = EdgeFlags;

    fn bitor(self, rhs: EdgeFlags) -> EdgeFlags {
        EdgeFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for EdgeFlags {
    fn bitor_assign(&mut self, rhs: EdgeFlags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for EdgeFlags {
    type Output = EdgeFlags;

    fn bitand(self, rhs: EdgeFlags) -> EdgeFlags {
        EdgeFlags(self.0 & rhs.0)
    }
}

/// An edge of an undirected multigraph.
///
/// Edges are created and destroyed by the graph that owns them. While an
/// edge is in a graph both endpoints are bound; `tail == head` is allowed
/// and denotes a self-loop.
#[derive(Debug, Clone)]
pub struct Edge {
    pub(crate) id: EdgeId,
    pub(crate) index: usize,
    pub(crate) u: Option<NodeId>,
    pub(crate) v: Option<NodeId>,
    pub(crate) weight: Weight,
    pub(crate) flags: EdgeFlags,
}

impl Edge {
    /// A fresh edge with no endpoints bound yet.
    pub(crate) fn detached(id: EdgeId, weight: Weight, flags: EdgeFlags) -> Edge {
        Edge {
            id,
            index: INVALID_INDEX,
            u: None,
            v: None,
            weight,
            flags,
        }
    }

    /// Stable identifier of the edge.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Weight of the edge.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Flags of the edge.
    pub fn flags(&self) -> EdgeFlags {
        self.flags
    }

    /// The two endpoints `(tail, head)` joined by the edge.
    pub fn nodes(&self) -> (NodeId, NodeId) {
        (self.tail(), self.head())
    }

    /// First endpoint of the edge's node pair.
    pub fn tail(&self) -> NodeId {
        self.u.expect("edge is detached")
    }

    /// Second endpoint of the edge's node pair.
    pub fn head(&self) -> NodeId {
        self.v.expect("edge is detached")
    }

    /// The endpoint opposite `n`, or `None` when `n` is not an endpoint.
    /// For a self-loop on `n` this is `n` itself.
    pub fn other(&self, n: NodeId) -> Option<NodeId> {
        if self.u == Some(n) {
            self.v
        } else if self.v == Some(n) {
            self.u
        } else {
            None
        }
    }

    /// Bind both endpoints at once.
    #[allow(dead_code)]
    pub(crate) fn join(&mut self, u: NodeId, v: NodeId) {
        self.u = Some(u);
        self.v = Some(v);
    }

    /// Bind `n` to whichever endpoint is currently vacant, tail first.
    pub(crate) fn connect(&mut self, n: NodeId) -> Result<()> {
        if self.u.is_none() {
            self.u = Some(n);
        } else if self.v.is_none() {
            self.v = Some(n);
        } else {
            return Err(GraphError::AlreadyConnected);
        }
        Ok(())
    }

    /// Unbind the endpoint holding `n`. For a self-loop only the tail
    /// slot is cleared.
    pub(crate) fn disconnect(&mut self, n: NodeId) {
        if self.u == Some(n) {
            self.u = None;
        } else if self.v == Some(n) {
            self.v = None;
        }
    }

    /// Rebind the endpoint holding `old` to `new`.
    #[allow(dead_code)]
    pub(crate) fn reconnect(&mut self, old: NodeId, new: NodeId) {
        if self.u == Some(old) {
            self.u = Some(new);
        } else if self.v == Some(old) {
            self.v = Some(new);
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.u, self.v) {
            (Some(u), Some(v)) => write!(f, "{u}--{v}"),
            (Some(u), None) => write!(f, "{u}--?"),
            (None, Some(v)) => write!(f, "?--{v}"),
            (None, None) => write!(f, "?--?"),
        }
    }
}
