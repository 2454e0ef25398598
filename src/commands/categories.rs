use std::path::Path;

use tracing::info;

use crate::core::load_reference;
use crate::error::WordGenError;

/// List category indices and labels from the reference file.
///
/// With `verbose`, each category's fragment list is printed underneath its
/// label.
pub fn list_categories(reference: &Path, verbose: bool) -> Result<(), WordGenError> {
    let table = load_reference(reference)?;
    info!(
        "Listing categories from reference file [{}]",
        reference.display()
    );

    if table.is_empty() {
        println!("No categories found.");
        return Ok(());
    }

    for (index, category) in table.iter().enumerate() {
        println!("{} {}", index, category.label());
        if verbose {
            println!("  {}", category.fragments().join(","));
        }
    }

    Ok(())
}
