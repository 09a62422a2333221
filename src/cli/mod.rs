//! CLI entrypoint module structure.

pub mod args;
pub mod profile;

pub use args::InvocationArgs;
pub use profile::{
    resolve_config_location, resolve_host_mode, resolve_required_files, ConfigLocation, HostMode,
    InputSource, InvocationProfile, REQUIRED_FILES_INPUT,
};
