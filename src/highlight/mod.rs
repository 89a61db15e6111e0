mod catalog;
mod heuristic;
mod lexer;
mod pipeline;

pub use catalog::{GrammarCatalog, SyntectCatalog};
pub use pipeline::process_document;
