use good_lp::{constraint, variable, Expression, Variable};

use crate::catalog::Catalog;
use crate::dsl::WindowSpec;

use super::constraint_set::ConstraintSet;
use super::variables::ModelVariables;

/// Big-M for window bands: windows are written independently of the day
/// bounds (e.g. `23:00` with a 08:00-22:00 day), so the gate can't be sized
/// off `day_end - day_start` the way the ordering/relational gates are.
/// An unselected window outside the day bounds would otherwise leak slack.
/// A full-day constant dominates any instance/window pair regardless of
/// where either falls, matching the teacher's own `big_m = 1440.0`.
const FULL_DAY_MINUTES: f64 = 1440.0;

/// Soft window preference for one instance: which window it was bound to
/// (`selectors`) and how far it strayed from the chosen window (`slack`).
pub struct WindowTerm {
    pub slack: Variable,
}

/// Builds the window-selector/slack machinery for every instance that has
/// at least one preferred window. An event's own windows win; `global_windows`
/// (the solve-time fallback, `ScheduleConfig::windows`) applies to any event
/// that declares none. Returns the generated constraints and the slack
/// variables the objective must penalise.
pub fn build_window_constraints(
    catalog: &Catalog,
    vars: &mut ModelVariables,
    global_windows: &[WindowSpec],
) -> (ConstraintSet, Vec<WindowTerm>) {
    let m = FULL_DAY_MINUTES;
    let mut out = ConstraintSet::new();
    let mut slacks = Vec::new();

    for (event_index, event) in catalog.events.iter().enumerate() {
        let windows: &[WindowSpec] = if event.windows.is_empty() { global_windows } else { &event.windows };
        if windows.is_empty() {
            continue;
        }

        for (i, &instance_var) in vars.by_event[event_index].iter().enumerate() {
            let slack = vars.vars.add(variable().min(0.0));
            slacks.push(WindowTerm { slack });

            let mut selector_sum = Expression::from(0.0);
            for (w, window) in windows.iter().enumerate() {
                let (lo, hi) = match window {
                    WindowSpec::Anchor(t) => (*t as f64, *t as f64),
                    WindowSpec::Range(lo, hi) => (*lo as f64, *hi as f64),
                };
                let y = vars.vars.add(variable().binary());
                selector_sum = selector_sum + y;

                // Symmetric band: violating either side costs the same slack.
                let desc = format!("{}[{}] window#{} lower bound {}", event.name, i + 1, w + 1, lo);
                out.push(desc, constraint!(instance_var + slack >= lo - m * (1.0 - y)));
                let desc = format!("{}[{}] window#{} upper bound {}", event.name, i + 1, w + 1, hi);
                out.push(desc, constraint!(instance_var <= hi + slack + m * (1.0 - y)));
            }
            let desc = format!("{}[{}] selects exactly one window", event.name, i + 1);
            out.push(desc, constraint!(selector_sum == 1.0));
        }
    }

    (out, slacks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Event};

    fn event_with_windows(name: &str, windows: &[&str]) -> Event {
        Event {
            name: name.to_string(),
            category: "cat".to_string(),
            unit: "unit".to_string(),
            amount: None,
            divisor: None,
            frequency: "1x daily".to_string(),
            constraints: Vec::new(),
            windows: windows.iter().map(|s| s.to_string()).collect(),
            note: None,
        }
    }

    #[test]
    fn no_windows_means_no_terms() {
        let catalog = Catalog::normalize(vec![event_with_windows("pill", &[])], &[]).unwrap();
        let mut vars = super::super::variables::build_instance_variables(&catalog, 0, 1440);
        let (constraints, slacks) = build_window_constraints(&catalog, &mut vars, &[]);
        assert!(constraints.is_empty());
        assert!(slacks.is_empty());
    }

    #[test]
    fn one_window_adds_one_slack_and_three_constraints() {
        let catalog = Catalog::normalize(vec![event_with_windows("breakfast", &["09:00"])], &[]).unwrap();
        let mut vars = super::super::variables::build_instance_variables(&catalog, 0, 1440);
        let (constraints, slacks) = build_window_constraints(&catalog, &mut vars, &[]);
        assert_eq!(slacks.len(), 1);
        // 2 band inequalities + 1 selector-sum-equals-one
        assert_eq!(constraints.len(), 3);
    }

    #[test]
    fn multiple_windows_add_a_selector_per_window() {
        let catalog =
            Catalog::normalize(vec![event_with_windows("shake", &["08:00", "17:00-19:00"])], &[]).unwrap();
        let mut vars = super::super::variables::build_instance_variables(&catalog, 0, 1440);
        let (constraints, slacks) = build_window_constraints(&catalog, &mut vars, &[]);
        assert_eq!(slacks.len(), 1);
        // 2 windows * 2 band inequalities + 1 selector-sum-equals-one
        assert_eq!(constraints.len(), 5);
    }

    #[test]
    fn global_windows_apply_only_when_the_event_declares_none() {
        let catalog = Catalog::normalize(
            vec![event_with_windows("pill", &[]), event_with_windows("lunch", &["12:00"])],
            &[],
        )
        .unwrap();
        let mut vars = super::super::variables::build_instance_variables(&catalog, 0, 1440);
        let fallback = vec![WindowSpec::Anchor(480)];
        let (constraints, slacks) = build_window_constraints(&catalog, &mut vars, &fallback);
        // pill gets the fallback window (1 slack, 3 constraints), lunch keeps
        // its own (1 slack, 3 constraints).
        assert_eq!(slacks.len(), 2);
        assert_eq!(constraints.len(), 6);
    }
}
