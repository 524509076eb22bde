//! Settings configuration types

mod voice;

pub use voice::VoiceSettings;
