use thiserror::Error;

/// Failures talking to the hosted Postgres service. Handlers surface these
/// uniformly as 500 (or 401 for rejected tokens, decided by the caller).
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("request to upstream service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("data service returned {status}: {message}")]
    Rest { status: u16, message: String },

    #[error("identity service returned {status}: {message}")]
    Auth { status: u16, message: String },

    #[error("data service returned no representation for the written row")]
    MissingRepresentation,
}
