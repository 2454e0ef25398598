pub mod categories;
pub mod generate;

pub use categories::*;
pub use generate::*;
