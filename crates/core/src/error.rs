use crate::types::DbId;

/// Domain error taxonomy.
///
/// The application surface only ever fails with "entity not found by id";
/// everything else (malformed forms, lost database connections) propagates
/// as a framework-level error.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },
}
