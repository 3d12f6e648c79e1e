pub mod axis;
pub mod config;
pub mod data;
pub mod datasource;
pub mod geometry;
pub mod state;

// Re-export everything for compatibility
pub use axis::*;
pub use config::*;
pub use data::*;
pub use datasource::*;
pub use geometry::*;
pub use state::*;
