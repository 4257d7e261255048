pub mod common;
pub mod completions;
pub mod locations;
pub mod rate;
pub mod sessions;
pub mod speakers;
