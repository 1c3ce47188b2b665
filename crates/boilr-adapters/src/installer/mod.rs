//! Package installer adapters.

mod memory;
mod npm;

pub use memory::{InstallCall, RecordingInstaller};
pub use npm::NpmInstaller;
