//! kwenv - Isolated configuration environments for kernel development workflows.
//!
//! A project's `.kw` directory holds a fixed set of config files. kwenv lets
//! that directory carry several named, complete copies of the set and
//! switches the active one by pointing the working config files at it with
//! symlinks, tracked through a single `env.current` pointer file. Each
//! environment is paired with a cache directory outside the project tree
//! holding its kernel `.config` artifact.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`environment`] - Environment layout, lifecycle, and cache artifacts
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Confirmation prompts and terminal output
//!
//! # Example
//!
//! ```no_run
//! use kwenv::environment::{CacheStore, EnvManager, ProjectLayout};
//!
//! let layout = ProjectLayout::new("/work/linux");
//! let cache = CacheStore::new("/home/user/.cache/kwenv");
//! let manager = EnvManager::new(layout, cache);
//! for name in manager.status()?.environments {
//!     println!("{name}");
//! }
//! # Ok::<(), kwenv::KwenvError>(())
//! ```

pub mod cli;
pub mod environment;
pub mod error;
pub mod ui;

pub use error::{KwenvError, Result};
