//! Fixed-size partitioning.

use valuekit_core::{QueryError, QueryResult};

/// Split `items` into consecutive chunks of `size` elements.
///
/// The final chunk holds whatever is left and may be shorter. An empty input
/// yields no chunks.
pub fn chunk<I>(items: I, size: usize) -> QueryResult<Vec<Vec<I::Item>>>
where
    I: IntoIterator,
{
    if size == 0 {
        tracing::debug!("rejected chunk size of zero");
        return Err(QueryError::invalid_argument(
            "chunk size must be greater than zero",
        ));
    }

    let mut chunks = Vec::new();
    let mut current = Vec::with_capacity(size);
    for item in items {
        current.push(item);
        if current.len() == size {
            chunks.push(std::mem::replace(&mut current, Vec::with_capacity(size)));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    Ok(chunks)
}
