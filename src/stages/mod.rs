pub mod consolidate;
pub mod links;
pub mod records;


pub use consolidate::consolidate;
pub use links::normalize_links;
pub use records::{LoopContext, assemble_records};
