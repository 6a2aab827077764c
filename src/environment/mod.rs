//! Environment management: layout, lifecycle, and cache artifacts.
//!
//! A project directory holds several named, complete copies of its managed
//! config set under `.kw/environments/`. The active copy is selected by
//! pointing the working config files at it with symlinks, recorded in a
//! single `env.current` pointer file. Each environment is paired with a cache
//! directory outside the project tree carrying its kernel `.config` artifact.
//!
//! - [`layout`] - Paths and simple queries over the `.kw` directory
//! - [`manager`] - The create/use/exit/destroy/list state machine
//! - [`cache`] - Per-environment kernel config artifacts
//! - [`defaults`] - Embedded default config templates
//! - [`name`] - Environment name validation

pub mod cache;
pub mod defaults;
pub mod layout;
pub mod manager;
pub mod name;

pub use cache::{default_cache_root, CacheSeed, CacheStore, CACHE_ARTIFACT};
pub use layout::{ProjectLayout, CONFIG_DIR, CURRENT_FILE, ENVIRONMENTS_DIR, MANAGED_CONFIGS};
pub use manager::{CreateOutcome, DestroyOutcome, EnvListing, EnvManager};
