//! Content-based fingerprint of a settlement's inputs.

use sha2::{Digest, Sha256};
use vc_ticket::Ticket;

use crate::error::{AppError, AppResult};

/// SHA-256 over the ticket's JSON form and the engine version, hex encoded.
///
/// Two reports with the same fingerprint were computed from identical inputs
/// by the same engine.
pub fn ticket_fingerprint(ticket: &Ticket, engine_version: &str) -> AppResult<String> {
    let mut hasher = Sha256::new();

    let ticket_json = serde_json::to_string(ticket)
        .map_err(|e| AppError::Report(format!("Failed to serialize ticket: {}", e)))?;
    hasher.update(ticket_json.as_bytes());

    hasher.update(engine_version.as_bytes());

    let result = hasher.finalize();
    Ok(format!("{:x}", result))
}
