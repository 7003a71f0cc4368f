pub mod conversion;
pub mod definition;
pub mod loader;
pub mod predicate;

pub use conversion::*;
pub use definition::*;
pub use loader::*;
pub use predicate::*;
