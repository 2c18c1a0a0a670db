pub mod nrc;
pub mod serialization;

mod traits;

pub use nrc::{NrcContract, NrcModule};
pub use traits::ModuleExecutor;
