use std::collections::BTreeSet;

/// Sorted, de-duplicated positions that are valid for a list of `len` records.
///
/// Selections come from the rendered view and can be stale after a
/// structural change, so anything past the end is dropped and logged.
pub fn normalize<I>(positions: I, len: usize) -> Vec<usize>
where
    I: IntoIterator<Item = usize>,
{
    let unique: BTreeSet<usize> = positions.into_iter().collect();
    let (valid, stale): (Vec<usize>, Vec<usize>) = unique.into_iter().partition(|&p| p < len);
    if !stale.is_empty() {
        tracing::warn!(?stale, len, "Skipping selected positions outside the table");
    }
    valid
}
