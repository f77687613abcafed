//! The assembly engine: page accumulation for merge and split.
//!
//! Both paths drive the same [`segment::OpenSegment`] accumulator. The merge
//! path fills a single segment from many sources and seals it once; the
//! split path fills one segment per boundary from a single source and seals
//! each as its split point is reached.

pub mod merger;
pub mod segment;
pub mod splitter;

pub use merger::{MergeReport, MergedSource, MissingSource, StagedMerge, merge, stage_merge};
pub use segment::OpenSegment;
pub use splitter::{SplitOptions, SplitReport, SplitSegment, split};
