//! CLI command implementations.

pub mod compare;
pub mod list;
pub mod stores;

pub use compare::CompareCommand;
pub use list::ListCommand;
pub use stores::StoresCommand;
