//! Weighted selection without replacement
//!
//! A [`Selector`] holds a population of items keyed by an opaque index and
//! selectable with probability proportional to their weight. The items form
//! an implicit binary tree over a flat array, 1-based: position `i` has its
//! parent at `i/2` and children at `2i` and `2i+1`. Draws and weight
//! updates are O(log n); selection without replacement is achieved by
//! zeroing the chosen item's weight in place.
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use randcut::select::{Selector, WeightedItem};
//!
//! let mut sel = Selector::new();
//! sel.push(WeightedItem::new(10, 1.0));
//! sel.push(WeightedItem::new(20, 3.0));
//! sel.init();
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let first = sel.select(&mut rng).unwrap();
//! let second = sel.select(&mut rng).unwrap();
//! assert_ne!(first, second);
//! assert!(sel.select(&mut rng).is_err());
//! ```

use rand::Rng;

use crate::error::{GraphError, Result};

/// An item selectable from a population with probability proportional to
/// its weight. `index` is an opaque caller-supplied key, typically an id
/// into another collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedItem {
    /// Caller-supplied key returned by [`Selector::select`].
    pub index: usize,
    /// Selection weight; finite and non-negative.
    pub weight: f64,
    /// Subtree weight maintained by [`Selector::init`].
    total: f64,
}

impl WeightedItem {
    /// Create an item with the given key and weight.
    pub fn new(index: usize, weight: f64) -> WeightedItem {
        WeightedItem {
            index,
            weight,
            total: 0.0,
        }
    }
}

/// A collection of weighted items selectable with weighted probabilities
/// without replacement.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    items: Vec<WeightedItem>,
}

impl Selector {
    /// Create an empty selector.
    pub fn new() -> Selector {
        Selector::default()
    }

    /// Create with capacity for `n` items.
    pub fn with_capacity(n: usize) -> Selector {
        Selector {
            items: Vec::with_capacity(n),
        }
    }

    /// Number of items in the population, consumed or not.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the selector holds no items at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item. [`init`](Selector::init) must run before the next
    /// selection.
    pub fn push(&mut self, item: WeightedItem) {
        self.items.push(item);
    }

    /// Drop all items, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Remaining selectable weight, i.e. the root total.
    pub fn total(&self) -> f64 {
        self.items.first().map_or(0.0, |root| root.total)
    }

    /// Establish the subtree totals. Must be called before selecting and
    /// after any `push`. Idempotent.
    pub fn init(&mut self) {
        for it in &mut self.items {
            it.total = it.weight;
        }
        for i in (1..self.items.len()).rev() {
            // 1-based parent of 1-based position i+1, shifted back to 0-based
            let parent = ((i + 1) >> 1) - 1;
            self.items[parent].total += self.items[i].total;
        }
    }

    /// Draw an item with probability `weight / total`, zero its weight and
    /// propagate the change through the ancestor totals, then return its
    /// key. Fails with `SelectorEmpty` when no selectable weight remains.
    pub fn select<R: Rng>(&mut self, rng: &mut R) -> Result<usize> {
        let total = self.total();
        if total <= 0.0 {
            return Err(GraphError::SelectorEmpty);
        }
        let mut r = total * rng.gen::<f64>();
        let mut i = 1usize; // 1-based walk from the root

        loop {
            r -= self.items[i - 1].weight;
            if r <= 0.0 {
                break; // fall within item i-1
            }
            i <<= 1; // move to the left child
            if i > self.items.len() {
                // rounding drift left a stale positive total; treat as drained
                return Err(GraphError::SelectorEmpty);
            }
            let d = self.items[i - 1].total;
            if r > d {
                // enough r to pass the whole left subtree; move to the
                // right child
                r -= d;
                i += 1;
                if i > self.items.len() {
                    return Err(GraphError::SelectorEmpty);
                }
            }
        }

        let w = self.items[i - 1].weight;
        let index = self.items[i - 1].index;

        self.items[i - 1].weight = 0.0;
        while i > 0 {
            self.items[i - 1].total -= w;
            i >>= 1;
        }

        Ok(index)
    }

    /// Replace the weight of the item at position `i`, propagating the
    /// delta through the ancestor totals. Out-of-range positions are
    /// ignored.
    pub fn set_weight(&mut self, i: usize, w: f64) {
        if i >= self.items.len() {
            return;
        }
        let delta = self.items[i].weight - w;
        self.items[i].weight = w;
        let mut i = i + 1;
        while i > 0 {
            self.items[i - 1].total -= delta;
            i >>= 1;
        }
    }
}
