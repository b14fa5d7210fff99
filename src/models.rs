use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The four named sub-intervals of a cycle, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseName {
    Menstrual,
    Follicular,
    Ovulation,
    Luteal,
}

/// Fixed display attributes keyed by phase name. These are constants of the
/// visualization, not derived from any input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseStyle {
    pub color: &'static str,
    pub intensity: f32,
}

impl PhaseName {
    pub fn style(self) -> PhaseStyle {
        match self {
            PhaseName::Menstrual => PhaseStyle {
                color: "#E91E63",
                intensity: 0.9,
            },
            PhaseName::Follicular => PhaseStyle {
                color: "#F8BBD0",
                intensity: 0.7,
            },
            PhaseName::Ovulation => PhaseStyle {
                color: "#FF9800",
                intensity: 1.0,
            },
            PhaseName::Luteal => PhaseStyle {
                color: "#9C27B0",
                intensity: 0.8,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PhaseName::Menstrual => "Menstrual",
            PhaseName::Follicular => "Follicular",
            PhaseName::Ovulation => "Ovulation",
            PhaseName::Luteal => "Luteal",
        }
    }
}

/// The already-computed prediction this crate derives from. Supplied by a
/// remote service; nothing here is calculated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub predicted_start: NaiveDate,
    pub predicted_end: NaiveDate,
    /// Total days in one cycle. Trusted to be >= 1.
    pub cycle_length: u32,
    pub fertile_start: NaiveDate,
    pub fertile_end: NaiveDate,
    /// Informational only, not used in phase derivation.
    pub pregnancy_percent: f32,
}

/// One phase's slice of the cycle: 1-based inclusive day bounds plus the
/// matching calendar dates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Phase {
    pub name: PhaseName,
    pub start: i64,
    pub end: i64,
    pub color: &'static str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// The four phases of one derived cycle. By construction they tile
/// `[1, cycle_length]` with no gaps or overlaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseSet {
    pub menstrual: Phase,
    pub follicular: Phase,
    pub ovulation: Phase,
    pub luteal: Phase,
}

impl PhaseSet {
    /// Look up the phase a chart day belongs to.
    pub fn get(&self, name: PhaseName) -> &Phase {
        match name {
            PhaseName::Menstrual => &self.menstrual,
            PhaseName::Follicular => &self.follicular,
            PhaseName::Ovulation => &self.ovulation,
            PhaseName::Luteal => &self.luteal,
        }
    }
}

/// One entry per day of the cycle, ordered 1..=cycle_length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDay {
    pub day: i64,
    pub phase: PhaseName,
    pub color: &'static str,
    pub intensity: f32,
    pub is_current: bool,
    pub date: NaiveDate,
}

/// Everything a cycle screen needs: the per-day chart array, where "today"
/// falls in the cycle, and the phase intervals themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleOverview {
    pub chart_data: Vec<ChartDay>,
    pub current_day: i64,
    pub days_until_menstrual: i64,
    /// `None` until a prediction has been fetched.
    pub phases: Option<PhaseSet>,
}

impl CycleOverview {
    /// The overview shown before any prediction is available.
    pub fn empty() -> Self {
        Self {
            chart_data: Vec::new(),
            current_day: 1,
            days_until_menstrual: 0,
            phases: None,
        }
    }
}
