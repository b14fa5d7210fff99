use chrono::{Duration, NaiveDate};

use crate::models::{ChartDay, CycleOverview, Phase, PhaseName, PhaseSet, PredictionInput};

/// Derive phase intervals and per-day chart data from a prediction.
///
/// Pure and deterministic: `today` is passed in so callers control the clock.
/// With no prediction yet, returns [`CycleOverview::empty`] instead of
/// failing. Date windows are taken as given; an inconsistent input (fertile
/// window overlapping menses, cycle shorter than its phases) produces a
/// correspondingly skewed chart rather than an error.
pub fn derive_cycle(prediction: Option<&PredictionInput>, today: NaiveDate) -> CycleOverview {
    let Some(p) = prediction else {
        return CycleOverview::empty();
    };

    let n = i64::from(p.cycle_length);
    let cycle_start = p.predicted_start;

    let menstrual_days = (p.predicted_end - p.predicted_start).num_days() + 1;
    // At least one follicular day, even when the fertile window opens the
    // day after menses ends.
    let follicular_days = ((p.fertile_start - p.predicted_end).num_days() - 1).max(1);
    let ovulation_days = (p.fertile_end - p.fertile_start).num_days() + 1;

    let menstrual_end = menstrual_days;
    let follicular_end = menstrual_end + follicular_days;
    let ovulation_end = follicular_end + ovulation_days;

    let phases = PhaseSet {
        menstrual: make_phase(PhaseName::Menstrual, 1, menstrual_end, cycle_start),
        follicular: make_phase(
            PhaseName::Follicular,
            menstrual_end + 1,
            follicular_end,
            cycle_start,
        ),
        ovulation: make_phase(
            PhaseName::Ovulation,
            follicular_end + 1,
            ovulation_end,
            cycle_start,
        ),
        // Luteal's end is pinned to the cycle length, not computed from
        // dates, so any drift from the windows above is absorbed here and
        // the four phases always tile [1, n].
        luteal: make_phase(PhaseName::Luteal, ovulation_end + 1, n, cycle_start),
    };

    let offset = (today - cycle_start).num_days();
    let current_day = offset.rem_euclid(n) + 1;

    let chart_data = (1..=n)
        .map(|day| {
            let name = if day <= phases.menstrual.end {
                PhaseName::Menstrual
            } else if day <= phases.follicular.end {
                PhaseName::Follicular
            } else if day <= phases.ovulation.end {
                PhaseName::Ovulation
            } else {
                PhaseName::Luteal
            };
            let style = name.style();
            ChartDay {
                day,
                phase: name,
                color: style.color,
                intensity: style.intensity,
                is_current: day == current_day,
                date: cycle_start + Duration::days(day - 1),
            }
        })
        .collect();

    let days_until_menstrual = (cycle_start - today).num_days().max(0);

    CycleOverview {
        chart_data,
        current_day,
        days_until_menstrual,
        phases: Some(phases),
    }
}

fn make_phase(name: PhaseName, start: i64, end: i64, cycle_start: NaiveDate) -> Phase {
    Phase {
        name,
        start,
        end,
        color: name.style().color,
        start_date: cycle_start + Duration::days(start - 1),
        end_date: cycle_start + Duration::days(end - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample() -> PredictionInput {
        PredictionInput {
            predicted_start: d("2025-08-01"),
            predicted_end: d("2025-08-05"),
            cycle_length: 28,
            fertile_start: d("2025-08-12"),
            fertile_end: d("2025-08-16"),
            pregnancy_percent: 22.5,
        }
    }

    #[test]
    fn no_prediction_yields_empty_overview() {
        let out = derive_cycle(None, d("2025-08-01"));
        assert_eq!(out, CycleOverview::empty());
        assert!(out.chart_data.is_empty());
        assert_eq!(out.current_day, 1);
        assert_eq!(out.days_until_menstrual, 0);
        assert!(out.phases.is_none());
    }

    #[test]
    fn chart_covers_every_cycle_day_once() {
        let out = derive_cycle(Some(&sample()), d("2025-08-01"));
        assert_eq!(out.chart_data.len(), 28);
        let days: HashSet<i64> = out.chart_data.iter().map(|c| c.day).collect();
        assert_eq!(days, (1..=28).collect::<HashSet<i64>>());
    }

    #[test]
    fn phases_tile_the_cycle() {
        let out = derive_cycle(Some(&sample()), d("2025-08-01"));
        let p = out.phases.unwrap();
        assert_eq!(p.menstrual.start, 1);
        assert_eq!(p.follicular.start, p.menstrual.end + 1);
        assert_eq!(p.ovulation.start, p.follicular.end + 1);
        assert_eq!(p.luteal.start, p.ovulation.end + 1);
        assert_eq!(p.luteal.end, 28);
    }

    #[test]
    fn august_scenario_matches_expected_ranges() {
        let out = derive_cycle(Some(&sample()), d("2025-08-01"));
        assert_eq!(out.current_day, 1);
        let p = out.phases.unwrap();
        assert_eq!((p.menstrual.start, p.menstrual.end), (1, 5));
        // Fertile window Aug 12-16 maps onto cycle days 12-16.
        assert_eq!((p.ovulation.start, p.ovulation.end), (12, 16));
        assert_eq!(p.ovulation.end - p.ovulation.start + 1, 5);
        assert_eq!(p.ovulation.start_date, d("2025-08-12"));
        assert_eq!(p.ovulation.end_date, d("2025-08-16"));
        assert_eq!(p.luteal.end, 28);
    }

    #[test]
    fn current_day_wraps_forward() {
        // 40 days past the predicted start in a 28-day cycle.
        let out = derive_cycle(Some(&sample()), d("2025-09-10"));
        assert_eq!(out.current_day, 13);
    }

    #[test]
    fn current_day_wraps_backward() {
        // Three days before the predicted window maps into the tail of the
        // previous cycle.
        let out = derive_cycle(Some(&sample()), d("2025-07-29"));
        assert_eq!(out.current_day, 26);
        assert_eq!(out.days_until_menstrual, 3);
    }

    #[test]
    fn current_day_always_in_range() {
        let p = sample();
        for offset in -60..=60 {
            let today = d("2025-08-01") + Duration::days(offset);
            let out = derive_cycle(Some(&p), today);
            assert!(
                (1..=28).contains(&out.current_day),
                "day {} out of range for offset {offset}",
                out.current_day
            );
        }
    }

    #[test]
    fn follicular_never_collapses() {
        // Fertile window starts the day after menses ends.
        let p = PredictionInput {
            fertile_start: d("2025-08-06"),
            fertile_end: d("2025-08-10"),
            ..sample()
        };
        let out = derive_cycle(Some(&p), d("2025-08-01"));
        let phases = out.phases.unwrap();
        assert_eq!(phases.follicular.end - phases.follicular.start + 1, 1);
        assert_eq!(phases.ovulation.start, phases.follicular.end + 1);
    }

    #[test]
    fn derivation_is_deterministic() {
        let p = sample();
        let a = derive_cycle(Some(&p), d("2025-08-09"));
        let b = derive_cycle(Some(&p), d("2025-08-09"));
        assert_eq!(a, b);
    }

    #[test]
    fn chart_days_carry_phase_attributes() {
        let out = derive_cycle(Some(&sample()), d("2025-08-09"));
        let phases = out.phases.as_ref().unwrap();
        for c in &out.chart_data {
            let owner = phases.get(c.phase);
            assert!(c.day >= owner.start && c.day <= owner.end);
            assert_eq!(c.color, owner.color);
            assert_eq!(c.intensity, c.phase.style().intensity);
            assert_eq!(c.is_current, c.day == out.current_day);
            assert_eq!(c.date, d("2025-08-01") + Duration::days(c.day - 1));
        }
        assert_eq!(out.chart_data.iter().filter(|c| c.is_current).count(), 1);
    }

    #[test]
    fn days_until_menstrual_is_zero_once_started() {
        let out = derive_cycle(Some(&sample()), d("2025-08-03"));
        assert_eq!(out.days_until_menstrual, 0);
        let ahead = derive_cycle(Some(&sample()), d("2025-07-20"));
        assert_eq!(ahead.days_until_menstrual, 12);
    }
}
