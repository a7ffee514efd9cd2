//! Compiles a table of recurring events and natural-language constraints
//! into a concrete daily timetable.
//!
//! The pipeline is five stages, each its own module: [`dsl`] parses
//! constraint/frequency/window strings, [`catalog`] resolves references and
//! expands events into instances, [`model`] builds the MILP, [`solver`]
//! hands it to `good_lp`, and [`decode`] reads the solution back out as
//! output rows.

pub mod catalog;
pub mod config;
pub mod decode;
pub mod dsl;
pub mod error;
pub mod model;
pub mod solver;

use tracing::{info, instrument};

pub use catalog::Event;
pub use config::{ScheduleConfig, Strategy};
pub use decode::Instance;
pub use error::ScheduleError;

/// A validated catalog of recurring events, ready to be solved against any
/// number of [`ScheduleConfig`]s.
pub struct Scheduler {
    catalog: catalog::Catalog,
}

impl Scheduler {
    /// Validates and normalizes a table of events: parses every DSL field,
    /// resolves `before`/`after`/`apart_from` references, and expands each
    /// event into its daily instance count. Fails fast on any malformed row.
    #[instrument(skip_all, fields(events = events.len()))]
    pub fn new(events: Vec<Event>) -> Result<Self, ScheduleError> {
        Self::with_global_windows(events, &[])
    }

    /// As [`Scheduler::new`], but applies `global_windows` to any event that
    /// specifies no windows of its own.
    pub fn with_global_windows(events: Vec<Event>, global_windows: &[String]) -> Result<Self, ScheduleError> {
        let catalog = catalog::Catalog::normalize(events, global_windows)?;
        Ok(Scheduler { catalog })
    }

    /// Builds the MILP for `config` and solves it, returning the output rows
    /// sorted by time-of-day. `config.windows` applies as a fallback to any
    /// event that declares no windows of its own (and wasn't already given
    /// one at construction time via [`Scheduler::with_global_windows`]).
    #[instrument(skip_all)]
    pub fn solve(&self, config: &ScheduleConfig) -> Result<Vec<Instance>, ScheduleError> {
        let (day_start, day_end) = config.day_bounds_minutes()?;

        let compiled = model::build(&self.catalog, config, day_start, day_end)?;
        let flat = compiled.flat.clone();

        let solved = solver::solve(compiled)?;
        let rows = decode::decode(&self.catalog, &flat, &solved);

        info!(rows = rows.len(), "schedule decoded");
        Ok(rows)
    }
}

/// Installs a `tracing` subscriber reading its filter from `RUST_LOG`
/// (defaulting to `info`). Intended for binaries; libraries embedding this
/// crate should install their own subscriber instead.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}
