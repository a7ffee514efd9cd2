use crate::error::ScheduleError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A reference to another event or category, as written in the DSL. Resolved
/// to concrete instances by the catalog normalizer, not by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintRef {
    WithinGroup,
    Unresolved(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintKind {
    Apart,
    ApartFrom,
    Before,
    After,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub kind: ConstraintKind,
    pub gap_minutes: i32,
    pub reference: ConstraintRef,
}

/// Parse one constraint string, e.g. `"≥6h apart"`, `"≥1h before food"`.
/// Accepts both the Unicode `≥` and ASCII `>=` forms.
pub fn parse_constraint(text: &str) -> Result<Constraint, ScheduleError> {
    let normalized = text.trim().replacen(">=", "≥", 1);

    let apart_from_re = Regex::new(r"^≥\s*(\d+(?:\.\d+)?)\s*([hm])\s+apart\s+from\s+(.+)$").unwrap();
    let before_re = Regex::new(r"^≥\s*(\d+(?:\.\d+)?)\s*([hm])\s+before\s+(.+)$").unwrap();
    let after_re = Regex::new(r"^≥\s*(\d+(?:\.\d+)?)\s*([hm])\s+after\s+(.+)$").unwrap();
    let apart_re = Regex::new(r"^≥\s*(\d+(?:\.\d+)?)\s*([hm])\s+apart$").unwrap();

    if let Some(caps) = apart_from_re.captures(&normalized) {
        let gap = gap_minutes(text, &caps[1], &caps[2])?;
        return Ok(Constraint {
            kind: ConstraintKind::ApartFrom,
            gap_minutes: gap,
            reference: ConstraintRef::Unresolved(caps[3].trim().to_string()),
        });
    }
    if let Some(caps) = before_re.captures(&normalized) {
        let gap = gap_minutes(text, &caps[1], &caps[2])?;
        return Ok(Constraint {
            kind: ConstraintKind::Before,
            gap_minutes: gap,
            reference: ConstraintRef::Unresolved(caps[3].trim().to_string()),
        });
    }
    if let Some(caps) = after_re.captures(&normalized) {
        let gap = gap_minutes(text, &caps[1], &caps[2])?;
        return Ok(Constraint {
            kind: ConstraintKind::After,
            gap_minutes: gap,
            reference: ConstraintRef::Unresolved(caps[3].trim().to_string()),
        });
    }
    if let Some(caps) = apart_re.captures(&normalized) {
        let gap = gap_minutes(text, &caps[1], &caps[2])?;
        return Ok(Constraint {
            kind: ConstraintKind::Apart,
            gap_minutes: gap,
            reference: ConstraintRef::WithinGroup,
        });
    }

    Err(ScheduleError::BadConstraint {
        text: text.to_string(),
        reason: "does not match `>=Nh apart`, `>=Nh apart from X`, `>=Nh before X` or `>=Nh after X`"
            .to_string(),
    })
}

fn gap_minutes(original: &str, value: &str, unit: &str) -> Result<i32, ScheduleError> {
    let value: f64 = value.parse().map_err(|_| ScheduleError::BadConstraint {
        text: original.to_string(),
        reason: format!("`{value}` is not a number"),
    })?;
    let minutes = match unit {
        "h" => value * 60.0,
        "m" => value,
        other => {
            return Err(ScheduleError::BadConstraint {
                text: original.to_string(),
                reason: format!("unknown duration unit `{other}`"),
            })
        }
    };
    Ok(minutes.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_apart() {
        let c = parse_constraint("≥6h apart").unwrap();
        assert_eq!(c.kind, ConstraintKind::Apart);
        assert_eq!(c.gap_minutes, 360);
        assert_eq!(c.reference, ConstraintRef::WithinGroup);
    }

    #[test]
    fn parses_ascii_gte() {
        let c = parse_constraint(">=8h apart").unwrap();
        assert_eq!(c.gap_minutes, 480);
    }

    #[test]
    fn parses_before_with_reference() {
        let c = parse_constraint("≥1h before food").unwrap();
        assert_eq!(c.kind, ConstraintKind::Before);
        assert_eq!(c.gap_minutes, 60);
        assert_eq!(c.reference, ConstraintRef::Unresolved("food".to_string()));
    }

    #[test]
    fn parses_after_with_fractional_hours() {
        let c = parse_constraint("≥0.5h after meal").unwrap();
        assert_eq!(c.gap_minutes, 30);
        let c2 = parse_constraint("≥0.25h after breakfast").unwrap();
        assert_eq!(c2.gap_minutes, 15);
    }

    #[test]
    fn parses_minutes_suffix() {
        let c = parse_constraint("≥45m before food").unwrap();
        assert_eq!(c.gap_minutes, 45);
    }

    #[test]
    fn parses_apart_from() {
        let c = parse_constraint("≥2h apart from med").unwrap();
        assert_eq!(c.kind, ConstraintKind::ApartFrom);
        assert_eq!(c.reference, ConstraintRef::Unresolved("med".to_string()));
    }

    #[test]
    fn rejects_unknown_form() {
        let err = parse_constraint("sometime soon").unwrap_err();
        assert!(matches!(err, ScheduleError::BadConstraint { .. }));
    }
}
