pub mod preflight;
pub mod required_files;
