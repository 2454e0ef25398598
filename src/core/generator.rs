use crate::core::Sampler;
use crate::error::IndexError;
use crate::models::CategoryTable;

/// Generate words by concatenating one random fragment per requested
/// category index.
///
/// Each repetition walks `indices` in order, draws one fragment per index
/// and joins them with no separator into a single word. The whole batch is
/// accumulated and returned at once, so a failing index never produces a
/// truncated word.
///
/// A `repetitions` value of zero or less yields no words. The same index
/// may appear multiple times; each occurrence is an independent draw.
pub fn generate(
    table: &CategoryTable,
    indices: &[i64],
    repetitions: i64,
    sampler: &mut Sampler,
) -> Result<Vec<String>, IndexError> {
    let mut words = Vec::new();

    for _ in 0..repetitions {
        sampler.begin_repetition();

        let mut word = String::new();
        for &index in indices {
            let category = usize::try_from(index)
                .ok()
                .and_then(|i| table.get(i))
                .ok_or(IndexError::OutOfRange {
                    index,
                    categories: table.len(),
                })?;
            word.push_str(sampler.draw(category.fragments()));
        }
        words.push(word);
    }

    Ok(words)
}
