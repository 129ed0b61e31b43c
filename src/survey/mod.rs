pub mod document;
pub mod storage;

pub use document::*;
pub use storage::*;
