use super::{IdRange, PartitionError};
use crate::model::ObjectId;

/// splits an ascending sequence of surviving identifiers into the fewest
/// contiguous ranges holding at most `max_chunk_size` identifiers each.
///
/// ranges are built by counting identifiers rather than by arithmetic on their
/// values, so filtered datasets and datasets with gaps in their identifiers
/// produce ranges that each hold a full chunk. an empty input produces no
/// ranges.
///
/// # Arguments
///
/// * `ids` - surviving identifiers, strictly ascending
/// * `max_chunk_size` - maximum number of identifiers in a range
///
/// # Returns
///
/// ranges in ascending order, or an error if the chunk size is zero or the
/// identifiers are out of order
pub fn partition_ids<I>(ids: I, max_chunk_size: usize) -> Result<Vec<IdRange>, PartitionError>
where
    I: IntoIterator<Item = ObjectId>,
{
    if max_chunk_size == 0 {
        return Err(PartitionError::InvalidChunkSize);
    }
    let mut ranges = vec![];
    let mut current: Option<IdRange> = None;
    let mut num_in_range: usize = 0;
    let mut previous: Option<ObjectId> = None;
    for id in ids {
        if let Some(prev) = previous {
            if id <= prev {
                return Err(PartitionError::UnorderedIds {
                    previous: prev,
                    current: id,
                });
            }
        }
        previous = Some(id);

        let range = current.get_or_insert(IdRange::new(id, id));
        range.high = id;
        num_in_range += 1;
        if num_in_range == max_chunk_size {
            ranges.extend(current.take());
            num_in_range = 0;
        }
    }
    ranges.extend(current);
    Ok(ranges)
}
