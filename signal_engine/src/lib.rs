//! Signal-derivation core for daily stock anomaly reports.
//!
//! The crate turns already-materialized daily bar series into scored, labeled,
//! and validated records:
//! - [`temperature`]: per-day 0-100 "market temperature" with event labels
//!   and limit-up streak detection.
//! - [`technical`]: moving averages, trend, volume-price relation, and
//!   support/resistance levels for one series.
//! - [`sector`]: rank and positioning of one symbol inside an
//!   externally-ranked sector snapshot.
//! - [`validate`]: trading-day repair and range checks over a computed
//!   temperature history.
//! - [`market`]: broad-market style and strength assessment from index
//!   quotes.
//!
//! Everything here is synchronous and free of I/O; inputs arrive from an
//! external provider (see the `report_pipeline` crate) and outputs are plain
//! serde-serializable records for an external renderer. Each function owns its
//! inputs for the duration of a call and keeps no state between calls, so
//! concurrent invocations over different series need no coordination.

pub mod errors;
pub mod market;
pub mod models;
pub mod render;
pub mod sector;
pub mod technical;
pub mod temperature;
pub mod validate;
