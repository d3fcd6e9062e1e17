mod edge_planner;

#[doc(inline)]
pub use edge_planner::{EdgePlanner, EdgeStatus, check_edges_parallel};
