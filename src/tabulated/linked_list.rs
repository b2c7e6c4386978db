//! Linked-list-backed tabulated function
//!
//! Samples are nodes of a circular doubly-linked list anchored by one
//! sentinel node. The sentinel's `next` is the first sample and its `prev`
//! the last, so inserting at the head, in the middle or at the tail is the
//! same splice.
//!
//! Nodes live in an arena (`Vec<Node>`) and link to each other by slot
//! index. Slot [`HEAD`] is the sentinel; slots freed by deletion go on a
//! free-list and are reused by the next insertion.
//!
//! There is no random access: indexed operations walk from the sentinel and
//! interpolation scans consecutive pairs, both `O(n)`.

use tracing::debug;

use crate::tabulated::config::{
    check_between, check_finite, check_index, uniform_grid, TabulatedCfg,
};
use crate::tabulated::errors::{ConstructionError, PointError};
use crate::tabulated::point::{lerp, FunctionPoint};
use crate::tabulated::storage::Storage;
use crate::tabulated::traits::TabulatedFunction;

/// Arena slot of the sentinel.
const HEAD: usize = 0;

const SENTINEL: FunctionPoint = FunctionPoint::new(f64::NAN, f64::NAN);


#[derive(Debug, Copy, Clone)]
struct Node {
    point: FunctionPoint,
    prev : usize,
    next : usize,
}


/// Tabulated function over a circular doubly-linked list.
///
/// # Construction
/// - [`LinkedListTabulatedFunction::new`]         : `count` uniform samples, `y = 0`
/// - [`LinkedListTabulatedFunction::from_values`] : uniform samples carrying `values`
///
/// Both have a `_with_cfg` form taking an explicit [`TabulatedCfg`];
/// [`TabulatedCfg::growth`] has no effect here.
#[derive(Debug, Clone)]
pub struct LinkedListTabulatedFunction {
    nodes: Vec<Node>,
    free : Vec<usize>,
    count: usize,
    cfg  : TabulatedCfg,
}

impl LinkedListTabulatedFunction {
    pub fn new(left: f64, right: f64, count: usize) -> Result<Self, ConstructionError> {
        Self::new_with_cfg(left, right, count, TabulatedCfg::default())
    }

    pub fn new_with_cfg(
        left : f64,
        right: f64,
        count: usize,
        cfg  : TabulatedCfg,
    ) -> Result<Self, ConstructionError> {
        let grid = uniform_grid(left, right, count, &cfg)?;

        let mut list = Self::with_sentinel(count, cfg);
        for x in grid {
            list.add_node_to_tail(FunctionPoint::new(x, 0.0));
        }
        Ok(list)
    }

    pub fn from_values(left: f64, right: f64, values: &[f64]) -> Result<Self, ConstructionError> {
        Self::from_values_with_cfg(left, right, values, TabulatedCfg::default())
    }

    pub fn from_values_with_cfg(
        left  : f64,
        right : f64,
        values: &[f64],
        cfg   : TabulatedCfg,
    ) -> Result<Self, ConstructionError> {
        let grid = uniform_grid(left, right, values.len(), &cfg)?;

        let mut list = Self::with_sentinel(values.len(), cfg);
        for (x, &y) in grid.zip(values) {
            list.add_node_to_tail(FunctionPoint::new(x, y));
        }
        Ok(list)
    }

    pub fn cfg(&self) -> TabulatedCfg { self.cfg }

    /// Copies of the samples, walking forward from the sentinel.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes    : &self.nodes,
            cur      : self.first(),
            remaining: self.count,
        }
    }

    /// Empty list: the sentinel linked to itself.
    fn with_sentinel(capacity: usize, cfg: TabulatedCfg) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node { point: SENTINEL, prev: HEAD, next: HEAD });

        Self { nodes, free: Vec::new(), count: 0, cfg }
    }

    #[inline] fn first(&self) -> usize { self.nodes[HEAD].next }
    #[inline] fn last(&self)  -> usize { self.nodes[HEAD].prev }

    fn alloc(&mut self, point: FunctionPoint) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Node { point, prev: slot, next: slot };
                slot
            }
            None => {
                let slot = self.nodes.len();
                self.nodes.push(Node { point, prev: slot, next: slot });
                slot
            }
        }
    }

    /// Links a new node between `target` and its predecessor.
    fn splice_before(&mut self, target: usize, point: FunctionPoint) -> usize {
        let slot = self.alloc(point);
        let prev = self.nodes[target].prev;

        self.nodes[slot].prev   = prev;
        self.nodes[slot].next   = target;
        self.nodes[prev].next   = slot;
        self.nodes[target].prev = slot;

        self.count += 1;
        slot
    }

    fn add_node_to_tail(&mut self, point: FunctionPoint) -> usize {
        self.splice_before(HEAD, point)
    }

    /// Relinks the neighbors of `slot` and frees it. `slot` must not be [`HEAD`].
    fn unlink(&mut self, slot: usize) {
        debug_assert_ne!(slot, HEAD, "cannot unlink the sentinel");
        let Node { prev, next, .. } = self.nodes[slot];

        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[slot].prev = slot;
        self.nodes[slot].next = slot;

        self.free.push(slot);
        self.count -= 1;
    }

    fn node_by_index(&self, index: usize) -> Result<usize, PointError> {
        check_index(index, self.count)?;

        let mut cur = self.first();
        for _ in 0..index {
            cur = self.nodes[cur].next;
        }
        Ok(cur)
    }

    /// x of the samples linked before and after `slot`, if they are not the sentinel.
    fn neighbors(&self, slot: usize) -> (Option<f64>, Option<f64>) {
        let Node { prev, next, .. } = self.nodes[slot];
        let lower = (prev != HEAD).then(|| self.nodes[prev].point.x());
        let upper = (next != HEAD).then(|| self.nodes[next].point.x());
        (lower, upper)
    }
}


impl TabulatedFunction for LinkedListTabulatedFunction {
    fn storage(&self) -> Storage { Storage::LinkedList }

    fn left_domain_border(&self) -> f64 {
        self.nodes[self.first()].point.x()
    }

    fn right_domain_border(&self) -> f64 {
        self.nodes[self.last()].point.x()
    }

    fn function_value(&self, x: f64) -> f64 {
        // domain check, also rejects NaN
        if !(x >= self.left_domain_border() && x <= self.right_domain_border()) {
            return f64::NAN;
        }

        let mut prev: Option<FunctionPoint> = None;
        for p in self.iter() {
            if self.cfg.same_x(p.x(), x) {
                return p.y();
            }
            if p.x() > x {
                return prev.map_or(f64::NAN, |p0| lerp(p0, p, x));
            }
            prev = Some(p);
        }
        f64::NAN
    }

    fn points_count(&self) -> usize {
        self.count
    }

    fn point(&self, index: usize) -> Result<FunctionPoint, PointError> {
        let slot = self.node_by_index(index)?;
        Ok(self.nodes[slot].point)
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), PointError> {
        let slot = self.node_by_index(index)?;
        let (lower, upper) = self.neighbors(slot);
        check_between(point.x(), lower, upper, &self.cfg)
            .inspect_err(|e| debug!(index, error = %e, "set_point rejected"))?;

        self.nodes[slot].point = point;
        Ok(())
    }

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), PointError> {
        let slot = self.node_by_index(index)?;
        let (lower, upper) = self.neighbors(slot);
        check_between(x, lower, upper, &self.cfg)
            .inspect_err(|e| debug!(index, error = %e, "set_point_x rejected"))?;

        self.nodes[slot].point.set_x(x);
        Ok(())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), PointError> {
        let slot = self.node_by_index(index)?;
        self.nodes[slot].point.set_y(y);
        Ok(())
    }

    fn add_point(&mut self, point: FunctionPoint) -> Result<(), PointError> {
        check_finite(point.x())?;

        // first node whose x is not less than point.x, else the sentinel (append)
        let mut target = HEAD;
        let mut index  = 0;
        let mut cur    = self.first();
        while cur != HEAD {
            let xi = self.nodes[cur].point.x();
            if self.cfg.same_x(xi, point.x()) {
                let err = PointError::DuplicateX { x: point.x(), existing: xi };
                debug!(error = %err, "add_point rejected");
                return Err(err);
            }
            if xi >= point.x() {
                target = cur;
                break;
            }
            cur = self.nodes[cur].next;
            index += 1;
        }

        self.splice_before(target, point);
        debug!(index, x = point.x(), count = self.count, "point added");
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<(), PointError> {
        let slot = self.node_by_index(index)?;
        if self.count < 3 {
            debug!(index, count = self.count, "delete_point rejected");
            return Err(PointError::Underflow { count: self.count });
        }

        self.unlink(slot);
        debug!(index, count = self.count, "point deleted");
        Ok(())
    }

    fn points(&self) -> Vec<FunctionPoint> {
        self.iter().collect()
    }
}


/// Forward iterator over copies of the samples of a
/// [`LinkedListTabulatedFunction`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    nodes    : &'a [Node],
    cur      : usize,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = FunctionPoint;

    fn next(&mut self) -> Option<FunctionPoint> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes[self.cur];
        self.cur = node.next;
        self.remaining -= 1;
        Some(node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a LinkedListTabulatedFunction {
    type Item = FunctionPoint;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
