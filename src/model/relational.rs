use good_lp::{constraint, variable, Expression};

use crate::catalog::Catalog;
use crate::dsl::ConstraintKind;

use super::constraint_set::ConstraintSet;
use super::variables::ModelVariables;

/// Big-M constant: large enough that a gated inequality is vacuous when its
/// selector is 0, small enough to avoid needless numerical range.
pub fn big_m(day_start: i32, day_end: i32, max_gap: i32) -> f64 {
    (day_end - day_start + max_gap) as f64
}

/// Before/After (existential) and ApartFrom (pairwise disjunctive) constraints.
pub fn build_relational_constraints(
    catalog: &Catalog,
    vars: &mut ModelVariables,
    day_start: i32,
    day_end: i32,
) -> ConstraintSet {
    let max_gap = catalog
        .events
        .iter()
        .flat_map(|e| e.constraints.iter())
        .map(|c| c.gap_minutes)
        .max()
        .unwrap_or(0);
    let m = big_m(day_start, day_end, max_gap);

    let mut out = ConstraintSet::new();

    for (event_index, event) in catalog.events.iter().enumerate() {
        for rc in &event.constraints {
            match rc.kind {
                ConstraintKind::Before => {
                    let gap = rc.gap_minutes as f64;
                    for (i, &owner_var) in vars.by_event[event_index].iter().enumerate() {
                        let mut selector_sum = Expression::from(0.0);
                        for &target_event in &rc.targets {
                            let target_name = catalog.events[target_event].name.clone();
                            for (k, &target_var) in vars.by_event[target_event].iter().enumerate() {
                                let s = vars.vars.add(variable().binary());
                                selector_sum = selector_sum + s;
                                let desc = format!(
                                    "{}[{}] before: selects {}[{}] >= {}",
                                    event.name, i + 1, target_name, k + 1, gap
                                );
                                out.push(desc, constraint!(target_var - owner_var >= gap - m * (1.0 - s)));
                            }
                        }
                        let desc = format!("{}[{}] before: at least one selector fires", event.name, i + 1);
                        out.push(desc, constraint!(selector_sum >= 1.0));
                    }
                }
                ConstraintKind::After => {
                    let gap = rc.gap_minutes as f64;
                    for (i, &owner_var) in vars.by_event[event_index].iter().enumerate() {
                        let mut selector_sum = Expression::from(0.0);
                        for &target_event in &rc.targets {
                            let target_name = catalog.events[target_event].name.clone();
                            for (k, &target_var) in vars.by_event[target_event].iter().enumerate() {
                                let s = vars.vars.add(variable().binary());
                                selector_sum = selector_sum + s;
                                let desc = format!(
                                    "{}[{}] after: selects {}[{}] >= {}",
                                    event.name, i + 1, target_name, k + 1, gap
                                );
                                out.push(desc, constraint!(owner_var - target_var >= gap - m * (1.0 - s)));
                            }
                        }
                        let desc = format!("{}[{}] after: at least one selector fires", event.name, i + 1);
                        out.push(desc, constraint!(selector_sum >= 1.0));
                    }
                }
                ConstraintKind::ApartFrom => {
                    let gap = rc.gap_minutes as f64;
                    for (i, &owner_var) in vars.by_event[event_index].iter().enumerate() {
                        for &target_event in &rc.targets {
                            let target_name = catalog.events[target_event].name.clone();
                            for (k, &target_var) in vars.by_event[target_event].iter().enumerate() {
                                let d = vars.vars.add(variable().binary());
                                let desc = format!(
                                    "{}[{}] apart from {}[{}] >= {}",
                                    event.name, i + 1, target_name, k + 1, gap
                                );
                                out.push(
                                    format!("{desc} (owner after)"),
                                    constraint!(owner_var - target_var >= gap - m * d),
                                );
                                out.push(
                                    format!("{desc} (owner before)"),
                                    constraint!(target_var - owner_var >= gap - m * (1.0 - d)),
                                );
                            }
                        }
                    }
                }
                ConstraintKind::Apart => {
                    // Handled in `ordering` as a consecutive-pair constraint.
                }
            }
        }
    }

    out
}
