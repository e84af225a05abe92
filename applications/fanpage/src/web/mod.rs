//! Browser bindings
//!
//! Capability adapters over `window` APIs and the entry point that mounts
//! the page onto the static markup.

pub mod adapters;
mod console;
pub mod page;

pub use adapters::{AudioElementSink, BrowserPrompt, LocalStorageStore, TimeoutScheduler, WindowOpener};
pub use console::init_logging;
pub use page::start;
