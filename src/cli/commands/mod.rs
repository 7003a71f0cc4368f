pub mod graph;
pub mod run;
pub mod validate;
pub mod version;

pub use graph::{GraphArgs, graph};
pub use run::{RunArgs, RunReport, run};
pub use validate::{ValidateArgs, validate};
pub use version::version;
