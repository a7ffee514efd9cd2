use crate::error::ScheduleError;
use serde::{Deserialize, Serialize};

/// A preferred time region for an instance, honoured softly via objective slack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowSpec {
    Anchor(i32),
    Range(i32, i32),
}

impl WindowSpec {
    pub fn parse(text: &str) -> Result<Self, ScheduleError> {
        let text = text.trim();
        if let Some((start, end)) = text.split_once('-') {
            let lo = parse_hhmm(text, start)?;
            let hi = parse_hhmm(text, end)?;
            if lo > hi {
                return Err(ScheduleError::BadWindow {
                    text: text.to_string(),
                    reason: format!("range is reversed: {lo} > {hi}"),
                });
            }
            Ok(WindowSpec::Range(lo, hi))
        } else {
            Ok(WindowSpec::Anchor(parse_hhmm(text, text)?))
        }
    }
}

fn parse_hhmm(original: &str, piece: &str) -> Result<i32, ScheduleError> {
    let piece = piece.trim();
    let (h, m) = piece.split_once(':').ok_or_else(|| ScheduleError::BadWindow {
        text: original.to_string(),
        reason: format!("`{piece}` is not in HH:MM format"),
    })?;
    let hour: i32 = h.parse().map_err(|_| ScheduleError::BadWindow {
        text: original.to_string(),
        reason: format!("bad hour `{h}`"),
    })?;
    let minute: i32 = m.parse().map_err(|_| ScheduleError::BadWindow {
        text: original.to_string(),
        reason: format!("bad minute `{m}`"),
    })?;
    if !(0..=23).contains(&hour) || !(0..=59).contains(&minute) {
        return Err(ScheduleError::BadWindow {
            text: original.to_string(),
            reason: format!("`{piece}` is out of range"),
        });
    }
    Ok(hour * 60 + minute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_anchor() {
        assert_eq!(WindowSpec::parse("08:00").unwrap(), WindowSpec::Anchor(480));
    }

    #[test]
    fn parses_range() {
        assert_eq!(
            WindowSpec::parse("12:00-13:00").unwrap(),
            WindowSpec::Range(720, 780)
        );
    }

    #[test]
    fn rejects_reversed_range() {
        assert!(WindowSpec::parse("13:00-12:00").is_err());
    }

    #[test]
    fn rejects_out_of_range_time() {
        assert!(WindowSpec::parse("24:00").is_err());
        assert!(WindowSpec::parse("08:60").is_err());
    }

    #[test]
    fn rejects_malformed() {
        assert!(WindowSpec::parse("not-a-time").is_err());
    }
}
