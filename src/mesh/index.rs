use std::borrow::Cow;

/// Indicates an invalid vertex reference in an index buffer.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum IndexError {
    /// An index refers to a vertex that does not exist.
    #[error("index {index} is out of bounds for a mesh with {num_vertices} vertices")]
    OutOfBounds {
        /// The offending index, as stored in the buffer.
        index: u32,
        /// The number of vertices the buffer refers into.
        num_vertices: usize,
    },
}

/// Normalizes an index buffer to 0-based indexing.
///
/// A buffer is accepted as-is when every index lies in `[0, num_vertices)`.
/// Uniformly 1-based buffers (as written by some meshing tools) are detected
/// exactly when the smallest index is 1 and the largest equals
/// `num_vertices`, and converted by subtracting one from every index. Any
/// other configuration is invalid.
///
/// Borrows the input when no conversion is needed.
pub fn normalize_indices<const N: usize>(
    indices: &[[u32; N]],
    num_vertices: usize,
) -> Result<Cow<'_, [[u32; N]]>, IndexError> {
    if indices.is_empty() {
        return Ok(Cow::Borrowed(indices));
    }

    let mut min = u32::MAX;
    let mut max = 0u32;
    for idx in indices.iter().flatten() {
        min = min.min(*idx);
        max = max.max(*idx);
    }

    if min == 1 && max as usize == num_vertices {
        let shifted = indices
            .iter()
            .map(|idx| idx.map(|i| i - 1))
            .collect::<Vec<_>>();
        return Ok(Cow::Owned(shifted));
    }

    if max as usize >= num_vertices {
        return Err(IndexError::OutOfBounds {
            index: max,
            num_vertices,
        });
    }

    Ok(Cow::Borrowed(indices))
}
