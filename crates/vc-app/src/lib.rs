//! vc-app: application service layer for volume settlement.
//!
//! Shared by the CLI and any other front end. Wraps the ticket and
//! correction crates behind one error type.

pub mod error;
pub mod fingerprint;
pub mod report;
pub mod settle;
pub mod ticket_service;

pub use error::{AppError, AppResult};
pub use report::{MovementReport, ReadingReport, SettlementReport};
pub use settle::{build_tank_catalog, reading_from_def, settle_ticket};
pub use ticket_service::ReadingSummary;
