//! Database ID type definition.

use uuid::Uuid;

use crate::Error;

/// The type used for the IDs of categories and transactions.
pub type DatabaseId = Uuid;

/// Parse an ID taken from a request path.
///
/// # Errors
///
/// Returns an [Error::InvalidId] if `raw_id` is not a UUID.
pub fn parse_database_id(raw_id: &str) -> Result<DatabaseId, Error> {
    Uuid::parse_str(raw_id.trim()).map_err(|_| Error::InvalidId(raw_id.to_owned()))
}
