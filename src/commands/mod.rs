//! Command implementations for Firmkeep CLI

pub mod completions;
pub mod helpers;
pub mod manifest;
pub mod publish;
pub mod version;
