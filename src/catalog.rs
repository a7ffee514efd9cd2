//! Catalog normalization: validates the raw input rows, parses every DSL
//! field, resolves `before`/`after`/`apart_from` references, and expands
//! each event into its instance slots.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dsl::{parse_constraint, Constraint, ConstraintKind, ConstraintRef, Frequency, WindowSpec};
use crate::error::ScheduleError;

/// One row of the input table: a recurring event and its constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub category: String,
    pub unit: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub divisor: Option<i32>,
    pub frequency: String,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub windows: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// A constraint after reference resolution: `targets` names the resolved
/// event indices into the owning `Catalog`, empty for `Apart` (within-group).
#[derive(Debug, Clone)]
pub struct ResolvedConstraint {
    pub kind: ConstraintKind,
    pub gap_minutes: i32,
    pub targets: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct NormalizedEvent {
    pub name: String,
    pub category: String,
    pub unit: String,
    pub amount: Option<f64>,
    pub divisor: Option<i32>,
    pub instance_count: u32,
    pub constraints: Vec<ResolvedConstraint>,
    pub windows: Vec<WindowSpec>,
    pub note: Option<String>,
}

/// The full, validated catalog: events in their original order plus the
/// lookup indices reference resolution used.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub events: Vec<NormalizedEvent>,
    name_index: HashMap<String, usize>,
    category_index: HashMap<String, Vec<usize>>,
}

impl Catalog {
    /// Validate, parse and expand raw `Event` rows. `global_windows` is
    /// applied to any event that specifies no windows of its own.
    pub fn normalize(events: Vec<Event>, global_windows: &[String]) -> Result<Catalog, ScheduleError> {
        let mut name_index = HashMap::new();
        for (idx, e) in events.iter().enumerate() {
            if name_index.insert(e.name.clone(), idx).is_some() {
                return Err(ScheduleError::DuplicateEvent { name: e.name.clone() });
            }
        }

        let mut category_index: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, e) in events.iter().enumerate() {
            category_index.entry(e.category.clone()).or_default().push(idx);
        }

        let global_windows = parse_windows(global_windows)?;

        let mut normalized = Vec::with_capacity(events.len());
        for e in &events {
            let frequency = Frequency::parse(&e.frequency)?;

            let constraints = e
                .constraints
                .iter()
                .map(|text| parse_constraint(text))
                .collect::<Result<Vec<Constraint>, _>>()?;

            let resolved = constraints
                .into_iter()
                .map(|c| resolve(&e.name, c, &name_index, &category_index))
                .collect::<Result<Vec<_>, _>>()?;

            let windows = if e.windows.is_empty() {
                global_windows.clone()
            } else {
                parse_windows(&e.windows)?
            };

            debug!(event = %e.name, instances = frequency.instances_per_day(), "normalized event");

            normalized.push(NormalizedEvent {
                name: e.name.clone(),
                category: e.category.clone(),
                unit: e.unit.clone(),
                amount: e.amount,
                divisor: e.divisor,
                instance_count: frequency.instances_per_day(),
                constraints: resolved,
                windows,
                note: e.note.clone(),
            });
        }

        Ok(Catalog { events: normalized, name_index, category_index })
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.name_index.get(name).copied()
    }

    pub fn category(&self, category: &str) -> &[usize] {
        self.category_index.get(category).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn parse_windows(texts: &[String]) -> Result<Vec<WindowSpec>, ScheduleError> {
    texts.iter().map(|t| WindowSpec::parse(t)).collect()
}

/// Resolve a constraint's `ref` string to concrete target event indices.
/// An exact event-name match wins over a category match when both exist.
fn resolve(
    owner: &str,
    c: Constraint,
    name_index: &HashMap<String, usize>,
    category_index: &HashMap<String, Vec<usize>>,
) -> Result<ResolvedConstraint, ScheduleError> {
    let targets = match &c.reference {
        ConstraintRef::WithinGroup => Vec::new(),
        ConstraintRef::Unresolved(reference) => {
            if let Some(&idx) = name_index.get(reference) {
                vec![idx]
            } else if let Some(indices) = category_index.get(reference) {
                indices.clone()
            } else {
                return Err(ScheduleError::UnknownReference {
                    owner: owner.to_string(),
                    reference: reference.clone(),
                });
            }
        }
    };

    Ok(ResolvedConstraint { kind: c.kind, gap_minutes: c.gap_minutes, targets })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(name: &str, category: &str, frequency: &str, constraints: &[&str]) -> Event {
        Event {
            name: name.to_string(),
            category: category.to_string(),
            unit: "unit".to_string(),
            amount: None,
            divisor: None,
            frequency: frequency.to_string(),
            constraints: constraints.iter().map(|s| s.to_string()).collect(),
            windows: Vec::new(),
            note: None,
        }
    }

    #[test]
    fn rejects_duplicate_names() {
        let events = vec![event("pill", "med", "1x daily", &[]), event("pill", "med", "1x daily", &[])];
        let err = Catalog::normalize(events, &[]).unwrap_err();
        assert!(matches!(err, ScheduleError::DuplicateEvent { .. }));
    }

    #[test]
    fn resolves_entity_name_over_category_tie() {
        // "food" is both a category and (in this catalog) an event name.
        let events = vec![
            event("food", "med", "1x daily", &[]),
            event("porridge", "food", "1x daily", &[]),
            event("supplement", "vitamin", "1x daily", &["≥1h before food"]),
        ];
        let catalog = Catalog::normalize(events, &[]).unwrap();
        let supplement = catalog.events.iter().find(|e| e.name == "supplement").unwrap();
        let targets = &supplement.constraints[0].targets;
        assert_eq!(targets, &vec![catalog.index_of("food").unwrap()]);
    }

    #[test]
    fn resolves_category_reference() {
        let events = vec![
            event("breakfast", "meal", "1x daily", &[]),
            event("lunch", "meal", "1x daily", &[]),
            event("vitamin", "supplement", "1x daily", &["≥0.5h after meal"]),
        ];
        let catalog = Catalog::normalize(events, &[]).unwrap();
        let vitamin = catalog.events.iter().find(|e| e.name == "vitamin").unwrap();
        let mut targets = vitamin.constraints[0].targets.clone();
        targets.sort();
        let mut expected = vec![catalog.index_of("breakfast").unwrap(), catalog.index_of("lunch").unwrap()];
        expected.sort();
        assert_eq!(targets, expected);
    }

    #[test]
    fn unknown_reference_fails() {
        let events = vec![event("supplement", "vitamin", "1x daily", &["≥1h before nothing"])];
        let err = Catalog::normalize(events, &[]).unwrap_err();
        assert!(matches!(err, ScheduleError::UnknownReference { .. }));
    }

    #[test]
    fn applies_global_windows_when_event_has_none() {
        let events = vec![event("pill", "med", "1x daily", &[])];
        let catalog = Catalog::normalize(events, &["08:00".to_string()]).unwrap();
        assert_eq!(catalog.events[0].windows, vec![WindowSpec::Anchor(480)]);
    }

    #[test]
    fn expands_instance_count_from_frequency() {
        let events = vec![event("ibuprofen", "med", "3x daily", &["≥4h apart"])];
        let catalog = Catalog::normalize(events, &[]).unwrap();
        assert_eq!(catalog.events[0].instance_count, 3);
    }
}
