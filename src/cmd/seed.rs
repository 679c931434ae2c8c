use standard_error::{Interpolate, StandardError};

use crate::{pkg::internal::store::seed_jobs, prelude::Result};

pub fn print() -> Result<()> {
    let jobs = seed_jobs();
    let out = serde_json::to_string_pretty(&jobs)
        .map_err(|e| StandardError::new("ERR-CMD-001").interpolate_err(e.to_string()))?;
    println!("{out}");
    tracing::debug!("printed {} seed jobs", jobs.len());
    Ok(())
}
