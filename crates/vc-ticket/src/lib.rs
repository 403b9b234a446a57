//! vc-ticket: gauging ticket file format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_ticket};

/// Newest ticket format this crate reads and writes.
pub const LATEST_VERSION: u32 = 1;

pub type TicketResult<T> = Result<T, TicketError>;

#[derive(thiserror::Error, Debug)]
pub enum TicketError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> TicketResult<Ticket> {
    let content = std::fs::read_to_string(path)?;
    let ticket: Ticket = serde_yaml::from_str(&content)?;
    validate_ticket(&ticket)?;
    Ok(ticket)
}

pub fn save_yaml(path: &std::path::Path, ticket: &Ticket) -> TicketResult<()> {
    validate_ticket(ticket)?;
    let content = serde_yaml::to_string(ticket)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> TicketResult<Ticket> {
    let content = std::fs::read_to_string(path)?;
    let ticket: Ticket = serde_json::from_str(&content)?;
    validate_ticket(&ticket)?;
    Ok(ticket)
}

pub fn save_json(path: &std::path::Path, ticket: &Ticket) -> TicketResult<()> {
    validate_ticket(ticket)?;
    let content = serde_json::to_string_pretty(ticket)?;
    std::fs::write(path, content)?;
    Ok(())
}
