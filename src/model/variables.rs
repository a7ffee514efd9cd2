use good_lp::{variable, ProblemVariables, Variable};

use crate::catalog::Catalog;

/// A single decision variable `t[e, i]`, keyed by its owning event and
/// 1-based instance index.
#[derive(Debug, Clone, Copy)]
pub struct InstanceVar {
    pub event_index: usize,
    pub instance_index: u32,
    pub var: Variable,
}

/// All decision variables for a catalog, indexed two ways: `by_event` for
/// constraint construction (ordered by instance within each event) and
/// `flat` for the deterministic catalog-then-instance iteration the spec's
/// solver determinism requirement names.
pub struct ModelVariables {
    pub vars: ProblemVariables,
    pub by_event: Vec<Vec<Variable>>,
    pub flat: Vec<InstanceVar>,
}

pub fn build_instance_variables(catalog: &Catalog, day_start: i32, day_end: i32) -> ModelVariables {
    let mut vars = ProblemVariables::new();
    let mut by_event = Vec::with_capacity(catalog.events.len());
    let mut flat = Vec::new();

    for (event_index, event) in catalog.events.iter().enumerate() {
        let mut instances = Vec::with_capacity(event.instance_count as usize);
        for i in 0..event.instance_count {
            let v = vars.add(variable().integer().min(day_start as f64).max(day_end as f64));
            instances.push(v);
            flat.push(InstanceVar { event_index, instance_index: i + 1, var: v });
        }
        by_event.push(instances);
    }

    ModelVariables { vars, by_event, flat }
}
