//! CLI command implementations

pub mod init;
pub mod matching;
pub mod phrases;
pub mod simulate;
