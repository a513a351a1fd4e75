use crate::models::{Part, QuestionRecord};

/// Splits records into parts of `chunk_size`, keeping their order.
///
/// The last part holds the remainder. An empty input yields no parts.
///
/// # Panics
///
/// Panics if `chunk_size` is zero.
pub fn partition(records: &[QuestionRecord], chunk_size: usize) -> Vec<Part> {
    assert!(chunk_size >= 1, "chunk size must be at least 1");

    records
        .chunks(chunk_size)
        .enumerate()
        .map(|(i, chunk)| {
            let start = i * chunk_size;
            let end = start + chunk.len();
            Part {
                number: i + 1,
                label: format!("Part {} (Question {} - {})", i + 1, start + 1, end),
                questions: chunk.to_vec(),
            }
        })
        .collect()
}
