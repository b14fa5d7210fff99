//! Cycle phase derivation and radial chart geometry.
//!
//! Takes an already-computed cycle prediction (next period window, fertile
//! window, cycle length) and derives the four phases (menstrual, follicular,
//! ovulation, luteal), a per-day chart array, and the geometry for a circular
//! day-ring visualization. The prediction itself comes from a remote service;
//! everything here is pure computation over it.

pub mod chart;
pub mod derive;
pub mod models;
pub mod wire;

pub use chart::{render_svg, ring_layout, RingLayout, RingOptions, RingSegment};
pub use derive::derive_cycle;
pub use models::{
    ChartDay, CycleOverview, Phase, PhaseName, PhaseSet, PhaseStyle, PredictionInput,
};
pub use wire::{decode_prediction, PredictionEnvelope, WireError};
