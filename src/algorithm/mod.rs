/// Multi-hole orchestration and run-time configuration
pub mod executor;
/// Weighted reconstruction of hole pixels
pub mod filler;
/// Seed search and breadth-first hole discovery
pub mod finder;
/// Interior and boundary record for one hole
pub mod hole;
/// Per-traversal visited bookkeeping
pub mod visited;
/// Injectable weight kernels
pub mod weights;
