//! JSON export
//!
//! The export is a complete serialization of a scan: every node with every
//! field, plus a `scanInfo` summary. It parses back into a `ScanResult` that
//! renders exactly like the scanned tree, without touching the filesystem.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tree::{Node, ScanResult};

/// Version of the export layout, bumped on incompatible changes.
pub const FORMAT_VERSION: u32 = 1;

/// Summary section of an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanInfo {
    pub root_path: String,
    pub scan_time: DateTime<Local>,
    pub total_files: usize,
    pub total_folders: usize,
    pub total_size: u64,
}

/// Root object of an export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub version: u32,
    #[serde(rename = "scanInfo")]
    pub scan_info: ScanInfo,
    pub tree: Node,
}

/// Build the export document for `result`, stamped with the current time.
pub fn export_data(result: &ScanResult) -> ExportDocument {
    ExportDocument {
        version: FORMAT_VERSION,
        scan_info: ScanInfo {
            root_path: result.root_path().display().to_string(),
            scan_time: Local::now(),
            total_files: result.total_files(),
            total_folders: result.total_folders(),
            total_size: result.total_size(),
        },
        tree: result.root().clone(),
    }
}

impl ExportDocument {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rebuild a `ScanResult` from the exported tree.
    ///
    /// Directory sizes and counts are recomputed from the leaves rather than
    /// trusted from the document.
    pub fn into_scan_result(self) -> ScanResult {
        ScanResult::from_root(
            rebuild_aggregates(self.tree),
            PathBuf::from(self.scan_info.root_path),
            self.scan_info.scan_time,
        )
    }
}

fn rebuild_aggregates(node: Node) -> Node {
    match node {
        Node::Directory {
            name,
            path,
            incomplete,
            children,
            ..
        } => {
            let children = children.into_iter().map(rebuild_aggregates).collect();
            Node::directory(name, path, children, incomplete)
        }
        file => file,
    }
}
