//! Helpers for SQLite queries.

/// Largest id list bound into a single `IN (...)` clause.
///
/// SQLite caps the number of bound parameters per statement (999 on older
/// builds), so id lists are split well below that.
pub const SQLITE_MAX_PARAMS_CHUNK: usize = 500;

/// Splits ids into slices that each fit one `IN (...)` query.
pub fn chunk_for_sqlite<T>(items: &[T]) -> impl Iterator<Item = &[T]> {
    items.chunks(SQLITE_MAX_PARAMS_CHUNK)
}
