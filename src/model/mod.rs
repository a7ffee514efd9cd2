//! Model Builder: turns a normalized `Catalog` into decision variables,
//! linear/disjunctive constraints and an objective, ready to hand to the
//! solver driver.

pub mod constraint_set;
pub mod objective;
pub mod ordering;
pub mod relational;
pub mod variables;
pub mod windows;

use good_lp::{Constraint, Expression, ProblemVariables};
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::{ScheduleConfig, Strategy};
use crate::dsl::WindowSpec;
use crate::error::ScheduleError;

pub use variables::InstanceVar;
use windows::WindowTerm;

/// Everything the solver driver needs: the variable pool, every hard
/// constraint, the objective, and the slack terms (for diagnostics only).
pub struct CompiledModel {
    pub vars: ProblemVariables,
    pub flat: Vec<InstanceVar>,
    pub constraints: Vec<Constraint>,
    pub objective: Expression,
    pub window_slacks: Vec<WindowTerm>,
}

pub fn build(
    catalog: &Catalog,
    config: &ScheduleConfig,
    day_start: i32,
    day_end: i32,
) -> Result<CompiledModel, ScheduleError> {
    let global_windows: Vec<WindowSpec> =
        config.windows.iter().map(|text| WindowSpec::parse(text)).collect::<Result<_, _>>()?;

    let mut vars = variables::build_instance_variables(catalog, day_start, day_end);

    let mut constraints = ordering::build_ordering_constraints(catalog, &vars);
    constraints.extend(relational::build_relational_constraints(catalog, &mut vars, day_start, day_end));

    let (window_constraints, window_slacks) =
        windows::build_window_constraints(catalog, &mut vars, &global_windows);
    constraints.extend(window_constraints);

    let objective = objective::build_objective(&vars, &window_slacks, config.strategy, day_end, config.penalty_weight);

    if config.debug {
        debug!(
            instances = vars.flat.len(),
            constraints = constraints.len(),
            window_terms = window_slacks.len(),
            strategy = ?config.strategy,
            "compiled model"
        );
        for desc in &constraints.descriptions {
            debug!(constraint = %desc);
        }
    }

    Ok(CompiledModel {
        vars: vars.vars,
        flat: vars.flat,
        constraints: constraints.constraints,
        objective,
        window_slacks,
    })
}

/// Strategy is carried through `ScheduleConfig`; re-exported here so callers
/// of the model layer don't need to reach back into `config`.
pub type ModelStrategy = Strategy;
