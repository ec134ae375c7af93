#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod input;
pub mod layout;
pub mod layout_dump;
pub mod tree;

pub use config::{LayoutConfig, SortOrder, load_config};
pub use input::parse_tree;
pub use layout::{Algorithm, layout_level, layout_tree};
pub use tree::Node;

#[cfg(feature = "cli")]
pub use cli::run;
