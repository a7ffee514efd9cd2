//! Decoder: reads the solved assignment back out in catalog-then-instance
//! order and renders each instance as an output row.

use crate::catalog::Catalog;
use crate::model::InstanceVar;
use crate::solver::SolvedModel;

/// One row of the output table.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Instance {
    pub entity_name: String,
    pub instance: u32,
    pub time_minutes: i32,
    pub time_hhmm: String,
}

pub fn decode(catalog: &Catalog, flat: &[InstanceVar], solution: &SolvedModel) -> Vec<Instance> {
    let mut rows: Vec<Instance> = flat
        .iter()
        .map(|iv| {
            let minutes = solution.value(iv.var).round() as i32;
            Instance {
                entity_name: catalog.events[iv.event_index].name.clone(),
                instance: iv.instance_index,
                time_minutes: minutes,
                time_hhmm: format_hhmm(minutes),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        a.time_minutes
            .cmp(&b.time_minutes)
            .then_with(|| a.entity_name.cmp(&b.entity_name))
            .then_with(|| a.instance.cmp(&b.instance))
    });

    rows
}

fn format_hhmm(minutes: i32) -> String {
    let h = minutes.div_euclid(60);
    let m = minutes.rem_euclid(60);
    format!("{h:02}:{m:02}")
}

#[cfg(test)]
mod tests {
    use super::format_hhmm;

    #[test]
    fn formats_zero_padded_hhmm() {
        assert_eq!(format_hhmm(540), "09:00");
        assert_eq!(format_hhmm(5), "00:05");
    }
}
