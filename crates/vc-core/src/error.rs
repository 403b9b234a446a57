use thiserror::Error;

pub type VcResult<T> = Result<T, VcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Negative value for {what}: {value}")]
    Negative { what: &'static str, value: f64 },
}
