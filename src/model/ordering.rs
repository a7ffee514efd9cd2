use good_lp::constraint;

use crate::catalog::Catalog;
use crate::dsl::ConstraintKind;

use super::constraint_set::ConstraintSet;
use super::variables::ModelVariables;

/// Instance labelling (`t[e,i+1] >= t[e,i]+1`) and, where the event carries
/// an `Apart{g}` constraint, the stronger consecutive gap `t[e,i+1] >= t[e,i]+g`.
/// Enforcing the gap between *consecutive* instances is sufficient to bound
/// every pair, since the gaps compose transitively along the chain.
pub fn build_ordering_constraints(catalog: &Catalog, vars: &ModelVariables) -> ConstraintSet {
    let mut out = ConstraintSet::new();

    for (event_index, event) in catalog.events.iter().enumerate() {
        let instances = &vars.by_event[event_index];
        if instances.len() < 2 {
            continue;
        }

        let apart_gap = event
            .constraints
            .iter()
            .filter(|c| c.kind == ConstraintKind::Apart)
            .map(|c| c.gap_minutes)
            .max()
            .unwrap_or(0);
        let gap = apart_gap.max(1) as f64;

        for (i, window) in instances.windows(2).enumerate() {
            let (prev, next) = (window[0], window[1]);
            let desc = format!("{}[{}..{}] consecutive gap >= {}", event.name, i + 1, i + 2, gap);
            out.push(desc, constraint!(next - prev >= gap));
        }
    }

    out
}
