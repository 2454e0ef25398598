use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::ReferenceError;
use crate::models::{Category, CategoryTable};

/// Load a reference file into a category table.
///
/// The file is UTF-8 text made of line pairs: line `2k` names category `k`
/// and line `2k+1` lists its fragments, separated by commas. A line without
/// a comma is a one-element fragment list. There is no comment syntax and
/// no escaping, so a fragment cannot contain a literal comma.
///
/// Fails when the file cannot be read or when the total line count is odd.
pub fn load_reference(path: &Path) -> Result<CategoryTable, ReferenceError> {
    let file = File::open(path).map_err(|e| ReferenceError::Read(path.to_path_buf(), e))?;

    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| ReferenceError::Read(path.to_path_buf(), e))?;
        lines.push(line);
    }

    if lines.len() % 2 != 0 {
        return Err(ReferenceError::OddLineCount {
            path: path.to_path_buf(),
            lines: lines.len(),
        });
    }

    let categories = lines
        .chunks(2)
        .map(|pair| Category::new(pair[0].clone(), split_fragments(&pair[1])))
        .collect();

    let table = CategoryTable::new(categories);
    debug!(
        "Loaded {} categories from {}",
        table.len(),
        path.display()
    );

    Ok(table)
}

fn split_fragments(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}
