use thiserror::Error;

/// Single error surface for the whole crate, from DSL parsing through solving.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("bad constraint `{text}`: {reason}")]
    BadConstraint { text: String, reason: String },

    #[error("bad frequency `{text}`: {reason}")]
    BadFrequency { text: String, reason: String },

    #[error("bad window `{text}`: {reason}")]
    BadWindow { text: String, reason: String },

    #[error("duplicate event name `{name}`")]
    DuplicateEvent { name: String },

    #[error("constraint on `{owner}` references unknown entity or category `{reference}`")]
    UnknownReference { owner: String, reference: String },

    #[error("day_start ({day_start}) must be before day_end ({day_end})")]
    DayBoundsInverted { day_start: i32, day_end: i32 },

    #[error("no feasible schedule{}", .last_constraint.as_ref().map(|c| format!(" (last constraint added: {c})")).unwrap_or_default())]
    Infeasible { last_constraint: Option<String> },

    #[error("solver error: {message}")]
    SolverError { message: String },
}
