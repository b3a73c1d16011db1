//! K-means grouping of observation vectors.
//!
//! Used to bootstrap groupings of observations before training.
//!
//! # References
//!
//! - Lloyd (1982), "Least squares quantization in PCM"

mod clusters;
mod kmeans;

pub use clusters::Clusters;
pub use kmeans::KMeans;
