//! Template catalog adapters.
//!
//! A catalog maps catalog-relative keys (`app.js`, `client/js/util.js`) to
//! starter file content. A lookup miss is not an error; the scaffolder writes
//! an empty file instead.

mod json;
mod memory;

pub use json::JsonCatalog;
pub use memory::InMemoryCatalog;
