use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// The sign of the time term in the objective: `Earliest` minimizes time,
/// `Latest` maximizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Earliest,
    Latest,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Earliest
    }
}

/// Solve-time parameters, independent of the event catalog itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub strategy: Strategy,
    pub day_start: String,
    pub day_end: String,
    /// Fallback window strings (e.g. `"09:00"`, `"17:00-19:00"`) applied at
    /// solve time to any event that declares no windows of its own.
    pub windows: Vec<String>,
    pub penalty_weight: f64,
    pub debug: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            strategy: Strategy::Earliest,
            day_start: "08:00".to_string(),
            day_end: "22:00".to_string(),
            windows: Vec::new(),
            penalty_weight: 1.0,
            debug: false,
        }
    }
}

impl ScheduleConfig {
    /// Parsed day bounds in minutes-of-day, validated as `day_start < day_end`.
    pub fn day_bounds_minutes(&self) -> Result<(i32, i32), ScheduleError> {
        let start = parse_hhmm(&self.day_start)?;
        let end = parse_hhmm(&self.day_end)?;
        if start >= end {
            return Err(ScheduleError::DayBoundsInverted { day_start: start, day_end: end });
        }
        Ok((start, end))
    }
}

fn parse_hhmm(text: &str) -> Result<i32, ScheduleError> {
    let (h, m) = text.split_once(':').ok_or_else(|| ScheduleError::BadWindow {
        text: text.to_string(),
        reason: "expected HH:MM".to_string(),
    })?;
    let hour: i32 = h.parse().map_err(|_| ScheduleError::BadWindow {
        text: text.to_string(),
        reason: format!("bad hour `{h}`"),
    })?;
    let minute: i32 = m.parse().map_err(|_| ScheduleError::BadWindow {
        text: text.to_string(),
        reason: format!("bad minute `{m}`"),
    })?;
    if !(0..=23).contains(&hour) || !(0..=59).contains(&minute) {
        return Err(ScheduleError::BadWindow { text: text.to_string(), reason: "out of range".to_string() });
    }
    Ok(hour * 60 + minute)
}
