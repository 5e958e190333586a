//! The computation core: classification, clipping, segmentation, weighting,
//! apportionment, and aggregation. Everything here is pure; all I/O lives in
//! the surrounding layers.

pub mod aggregate;
pub mod apportion;
pub mod classifier;
pub mod intervals;
pub mod segmenter;
pub mod weigher;
