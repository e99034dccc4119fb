//! The three steps of a hook reload
//!
//! - `project`: the project directory must exist
//! - `direnv`: re-evaluate the environment with the force flag set
//! - `timestamps`: make the rebuilt cache look as fresh as `.envrc`

pub mod direnv;
pub mod project;
pub mod timestamps;

pub use direnv::ForcedReload;
pub use project::ensure_project_dir;
pub use timestamps::SyncReport;
