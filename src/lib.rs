//! infocontent: Feature Discrimination Library
//!
//! A library for scoring how well each feature separates a set of classes
//! using Shannon information content, Kullback divergence and
//! accumulated-frequency differences over equal-width gradations.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
