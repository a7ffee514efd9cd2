use crate::error::ScheduleError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How often an event recurs. The core schedules every period as if it
/// were `daily`: `count` instances placed within the single synthetic day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frequency {
    pub count: u32,
    pub period: Period,
}

impl Frequency {
    pub fn parse(text: &str) -> Result<Self, ScheduleError> {
        let re = Regex::new(r"(?i)^\s*(\d+)\s*x\s*(daily|weekly|monthly|yearly)\s*$").unwrap();
        let caps = re.captures(text).ok_or_else(|| ScheduleError::BadFrequency {
            text: text.to_string(),
            reason: "expected `Nx daily|weekly|monthly|yearly`".to_string(),
        })?;

        let count: u32 = caps[1].parse().map_err(|_| ScheduleError::BadFrequency {
            text: text.to_string(),
            reason: "count is not a valid integer".to_string(),
        })?;
        if count < 1 {
            return Err(ScheduleError::BadFrequency {
                text: text.to_string(),
                reason: "count must be at least 1".to_string(),
            });
        }

        let period = match caps[2].to_lowercase().as_str() {
            "daily" => Period::Daily,
            "weekly" => Period::Weekly,
            "monthly" => Period::Monthly,
            "yearly" => Period::Yearly,
            other => {
                return Err(ScheduleError::BadFrequency {
                    text: text.to_string(),
                    reason: format!("unrecognised period `{other}`"),
                })
            }
        };

        Ok(Frequency { count, period })
    }

    /// Number of instance slots this event expands to within the single day.
    pub fn instances_per_day(&self) -> u32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_daily_forms() {
        assert_eq!(
            Frequency::parse("1x daily").unwrap(),
            Frequency { count: 1, period: Period::Daily }
        );
        assert_eq!(
            Frequency::parse("3x daily").unwrap(),
            Frequency { count: 3, period: Period::Daily }
        );
    }

    #[test]
    fn parses_other_periods_but_keeps_count() {
        let f = Frequency::parse("3x weekly").unwrap();
        assert_eq!(f.count, 3);
        assert_eq!(f.period, Period::Weekly);
        assert_eq!(f.instances_per_day(), 3);
    }

    #[test]
    fn is_case_and_space_insensitive() {
        assert!(Frequency::parse("2X   Daily").is_ok());
    }

    #[test]
    fn rejects_unknown_period() {
        let err = Frequency::parse("2x fortnightly").unwrap_err();
        assert!(matches!(err, ScheduleError::BadFrequency { .. }));
    }

    #[test]
    fn rejects_garbage() {
        assert!(Frequency::parse("whenever").is_err());
        assert!(Frequency::parse("0x daily").is_err());
    }
}
