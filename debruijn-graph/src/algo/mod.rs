/// Indegrees and outdegrees, degree balance and the choice of a start node for Eulerian traversals.
pub mod degree;
/// Eulerian paths and cycles.
pub mod eulerian;
/// Maximal non-branching paths, i.e. contigs.
pub mod non_branching_paths;
