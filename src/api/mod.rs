//! API Lambda handler and request processing

pub mod handler;
pub mod helpers;
pub mod parsing;

// Re-export the main handler for convenience
pub use handler::handler;

pub const MISSING_ID_MESSAGE: &str = "exhibitionID is missing or empty in the query parameters.";
/// Wording shipped by the first release, kept for clients that match on it.
pub const LEGACY_MISSING_ID_MESSAGE: &str = "userID is missing or empty in the query parameters.";
pub const QUERY_FAILURE_MESSAGE: &str = "An error occurred while querying the database.";
pub const UNEXPECTED_FAILURE_MESSAGE: &str = "An unexpected error occurred.";
