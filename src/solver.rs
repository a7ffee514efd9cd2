//! Solver Driver: hands the compiled model to `good_lp`'s `microlp` backend
//! and turns its outcome into either a solved variable assignment or one of
//! the taxonomy's `Infeasible`/`SolverError` cases.

use good_lp::{default_solver, Solution, SolverModel, Variable};
use tracing::{info, instrument};

use crate::error::ScheduleError;
use crate::model::CompiledModel;

/// A solved assignment: `value(var)` reads back a decision variable's
/// minutes-of-day value.
pub struct SolvedModel {
    solution: Box<dyn Solution>,
}

impl SolvedModel {
    pub fn value(&self, var: Variable) -> f64 {
        self.solution.value(var)
    }
}

#[instrument(skip_all)]
pub fn solve(model: CompiledModel) -> Result<SolvedModel, ScheduleError> {
    let CompiledModel { vars, constraints, objective, .. } = model;

    let mut problem = vars.minimise(objective).using(default_solver);
    for c in constraints {
        problem = problem.with(c);
    }

    let last_constraint = None;
    match problem.solve() {
        Ok(solution) => {
            info!("solved");
            Ok(SolvedModel { solution: Box::new(solution) })
        }
        Err(good_lp::ResolutionError::Infeasible) => Err(ScheduleError::Infeasible { last_constraint }),
        Err(e) => Err(ScheduleError::SolverError { message: e.to_string() }),
    }
}
