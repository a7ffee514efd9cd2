use good_lp::Expression;

use crate::config::Strategy;

use super::variables::ModelVariables;
use super::windows::WindowTerm;

/// `earliest` minimizes the sum of instance times; `latest` minimizes the
/// sum of `day_end - t` (equivalent to maximizing time). Either way the
/// window-penalty term is added on top, scaled by `penalty_weight`.
pub fn build_objective(
    vars: &ModelVariables,
    slacks: &[WindowTerm],
    strategy: Strategy,
    day_end: i32,
    penalty_weight: f64,
) -> Expression {
    let mut objective = Expression::from(0.0);

    for instance in &vars.flat {
        objective = match strategy {
            Strategy::Earliest => objective + instance.var,
            Strategy::Latest => objective + (day_end as f64 - instance.var),
        };
    }

    for term in slacks {
        objective = objective + penalty_weight * term.slack;
    }

    objective
}
