pub mod answers;
pub mod value;

pub use answers::*;
pub use value::*;
