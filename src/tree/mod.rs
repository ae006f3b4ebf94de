//! Directory scanning and the in-memory tree model
//!
//! `TreeScanner` walks a directory depth-first and builds an immutable
//! `Node` tree, aggregating sizes and counts bottom-up. Every renderer in
//! `crate::output` consumes the resulting `ScanResult` read-only.

mod config;
mod filter;
mod node;
mod result;
mod utils;
mod walker;

// Re-export public types
pub use config::{ScanConfig, SizeRange, normalize_extension};
pub use filter::FileFilter;
pub use node::{Node, NodeKind};
pub use result::ScanResult;
pub use utils::{compare_nodes, format_size};
pub use walker::{TreeScanner, scan};
