//! Per-unit resolution: the effective-value facade and derived attributes.
mod derived;
mod expanded;

pub use expanded::ExpandedUnit;
