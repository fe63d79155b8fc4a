//! Time-series utilities for chart preparation.
//!
//! Modules include:
//! - `calendar`: canonical calendar-date keys
//! - `merge`: align two independently dated series on a shared label axis
//! - `downsample`: thin long series per timeframe tier, keeping both ends
//! - `normalize`: bucket raw samples into daily points and extend predictions
/// Calendar-date canonicalization.
pub mod calendar;
/// Downsampling by deterministic stride.
pub mod downsample;
/// Union-merge of two dated series.
pub mod merge;
/// Daily normalization and next-day helpers.
pub mod normalize;
