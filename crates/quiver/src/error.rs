pub type Result<T> = std::result::Result<T, Error>;

/// The structural error taxonomy is deliberately small: mutation against the
/// referential invariant is a silent no-op, and queries about absent vertices
/// report empty results. Only construction from malformed input can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("adjacency matrix is not square: {rows} rows, but row {row} has {len} columns")]
    NonSquareMatrix { rows: usize, row: usize, len: usize },
}
