//! CSV plan-config loader.
//!
//! # CSV format
//!
//! One row per category.  `capacity` may be left empty to use the
//! scheduler's default.
//!
//! ```csv
//! category_id,name,rate,jitter,capacity
//! 0,ore,0.2,0.1,
//! 1,crystal,2.5,0,16
//! ```
//!
//! Rows are returned in file order.  A negative or non-finite `rate` or
//! `jitter` is rejected, as is a second row for an already-seen
//! `category_id`.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pace_core::CategoryId;

use crate::{PlanConfig, ScheduleError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PlanRecord {
    category_id: u32,
    name:        String,
    rate:        f64,
    jitter:      f64,
    capacity:    Option<usize>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load plan configs from a CSV file.
pub fn load_plan_configs_csv(path: &Path) -> Result<Vec<PlanConfig>, ScheduleError> {
    let file = std::fs::File::open(path)
        .map_err(ScheduleError::Io)?;
    load_plan_configs_reader(file)
}

/// Like [`load_plan_configs_csv`] but accepts any `Read` source.
pub fn load_plan_configs_reader<R: Read>(reader: R) -> Result<Vec<PlanConfig>, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut seen: HashSet<u32> = HashSet::new();
    let mut configs = Vec::new();

    for result in csv_reader.deserialize::<PlanRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;

        check_non_negative("rate", row.category_id, row.rate)?;
        check_non_negative("jitter", row.category_id, row.jitter)?;
        if !seen.insert(row.category_id) {
            return Err(ScheduleError::DuplicateCategory(CategoryId(row.category_id)));
        }

        configs.push(PlanConfig {
            category_id: CategoryId(row.category_id),
            name:        row.name,
            rate:        row.rate,
            jitter:      row.jitter,
            capacity:    row.capacity,
        });
    }

    Ok(configs)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn check_non_negative(field: &str, category: u32, value: f64) -> Result<(), ScheduleError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ScheduleError::Parse(format!(
            "category {category}: {field} must be finite and >= 0, got {value}"
        )))
    }
}
