//! `pace-core` — foundational types for the `rust_pace` event pacer.
//!
//! This crate is a dependency of every other `pace-*` crate.  It intentionally
//! has no `pace-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module  | Contents                                              |
//! |---------|-------------------------------------------------------|
//! | [`ids`] | `CategoryId`                                          |
//! | [`rng`] | `JitterRng` (seeded, bounded perturbations)           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `CategoryId`.            |

pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::CategoryId;
pub use rng::{DEFAULT_SEED, JitterRng};
