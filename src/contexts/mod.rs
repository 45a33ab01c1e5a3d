// Context modules for application state management
pub mod error;
pub mod kubeconfig;
pub mod snapshot;

pub use error::*;
pub use kubeconfig::*;
pub use snapshot::*;
