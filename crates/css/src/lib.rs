pub mod block;
pub mod emit;
pub mod sheet;

// Re-export main types
pub use block::StyleBlock;
pub use emit::{emit_block, emit_rules};
pub use sheet::{ServerStyleSheet, SheetError};
