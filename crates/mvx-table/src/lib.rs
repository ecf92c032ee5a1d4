//! Rectangular cell tables, padding and normalization for MVX datasets.

pub mod export;
pub mod normalize;
pub mod table;

pub use export::write_csv;
pub use normalize::TruthLexicon;
pub use table::{Cell, Table};
