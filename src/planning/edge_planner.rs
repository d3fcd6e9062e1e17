use rayon::prelude::*;

use crate::cspace::CSpace;
use crate::geometry::primitives::{Edge, Point};

/// Completion state of an [`EdgePlanner`]'s incremental evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeStatus {
    /// Not yet evaluated
    Pending,
    /// Evaluated, the segment is collision-free
    Visible,
    /// Evaluated, the segment is infeasible
    Blocked,
}

/// Answers whether straight-line motion between two configurations is collision-free,
/// in whole or per obstacle.
///
/// Created per query and destroyed after use; holds a non-owning reference to the
/// [`CSpace`] and never mutates it, so any number of planners can be evaluated
/// concurrently against the same space.
#[derive(Clone, Debug)]
pub struct EdgePlanner<'a> {
    space: &'a CSpace,
    pub start: Point,
    pub end: Point,
    edge: Edge,
    status: EdgeStatus,
}

impl<'a> EdgePlanner<'a> {
    pub fn new(space: &'a CSpace, start: Point, end: Point) -> Self {
        EdgePlanner {
            space,
            start,
            end,
            edge: Edge { start, end },
            status: EdgeStatus::Pending,
        }
    }

    /// Creates a planner already resolved against the single identified obstacle,
    /// for lazy planners that defer full validation.
    pub fn resolved_at(space: &'a CSpace, start: Point, end: Point, index: usize) -> Self {
        let mut planner = EdgePlanner::new(space, start, end);
        planner.status = match planner.is_visible_at(index) {
            true => EdgeStatus::Visible,
            false => EdgeStatus::Blocked,
        };
        planner
    }

    /// One-shot check of the segment against the full space (boundary + all obstacles).
    /// Retains no state.
    pub fn is_visible(&self) -> bool {
        !self.space.obstacle_overlap_edge(&self.edge)
    }

    /// Restricts the segment check to a single global obstacle index.
    pub fn is_visible_at(&self, index: usize) -> bool {
        !self.space.obstacle_overlap_edge_at(&self.edge, index)
    }

    /// Evaluates every obstacle index once; the result is sized to
    /// [`CSpace::num_obstacles`] and its `i`-th entry matches `is_visible_at(i)`.
    pub fn check_visible(&self) -> Vec<bool> {
        (0..self.space.num_obstacles())
            .map(|i| self.is_visible_at(i))
            .collect()
    }

    /// Performs the full visibility check exactly once and resolves the planner.
    /// Subsequent calls return the recorded outcome without re-evaluating.
    /// Returns whether the edge is visible.
    pub fn plan(&mut self) -> bool {
        match self.status {
            EdgeStatus::Pending => {
                let visible = self.is_visible();
                self.status = match visible {
                    true => EdgeStatus::Visible,
                    false => EdgeStatus::Blocked,
                };
                visible
            }
            EdgeStatus::Visible => true,
            EdgeStatus::Blocked => false,
        }
    }

    /// Whether [`EdgePlanner::plan`] has resolved this planner.
    pub fn done(&self) -> bool {
        self.status != EdgeStatus::Pending
    }

    /// Whether the resolved outcome was [`EdgeStatus::Blocked`].
    /// Only meaningful once [`EdgePlanner::done`] returns true.
    pub fn failed(&self) -> bool {
        debug_assert!(self.done(), "failed() queried before plan()");
        self.status == EdgeStatus::Blocked
    }

    pub fn status(&self) -> EdgeStatus {
        self.status
    }

    /// Squared Euclidean length of the segment, used by incremental planners to
    /// order pending edge evaluations.
    pub fn priority(&self) -> f32 {
        self.edge.sq_length()
    }

    /// Point on the segment at parameter `u in [0, 1]`.
    pub fn interpolate(&self, u: f32) -> Point {
        self.edge.interpolate(u)
    }

    /// A pending planner for the same segment in the opposite direction.
    pub fn reversed(&self) -> EdgePlanner<'a> {
        EdgePlanner::new(self.space, self.end, self.start)
    }
}

/// Validates a batch of candidate edges in parallel, one planner per edge.
/// Returns one visibility verdict per input pair, in order.
pub fn check_edges_parallel(space: &CSpace, edges: &[(Point, Point)]) -> Vec<bool> {
    edges
        .par_iter()
        .map(|&(start, end)| EdgePlanner::new(space, start, end).is_visible())
        .collect()
}
