//! Commit graph building
//!
//! Turns a newest-first commit window into positioned, colored nodes and
//! classified edges. Lineages are inferred from parent pointers only.

mod builder;
mod layout;
mod lineage;
mod palette;

pub use builder::{build_commit_graph, build_commit_graph_with};
pub use layout::{BASE_X, LANE_WIDTH, LayoutConfig, ROW_HEIGHT};
pub use lineage::LineageAssigner;
pub use palette::{LINEAGE_PALETTE, hex_to_rgb, lineage_color};
