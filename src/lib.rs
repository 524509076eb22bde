//! voicedrive - Voice commands for steering a game actor
//!
//! voicedrive turns the noisy, continuously revised output of a streaming
//! speech recognizer into discrete, counted game actions ("left left" steers
//! left twice) and keeps the recognition session alive across the
//! recognizer's transient failures and timeouts.
//!
//! ## Collaborators
//!
//! The crate owns no audio, rendering or game state. It talks to:
//!
//! 1. **Recognizer**: starts/stops a stream and reports results and lifecycle
//!    signals back as [`voice::RecognizerEvent`]s.
//! 2. **Actor**: the game entity that steers, accelerates, brakes and turns.
//! 3. **StatusSink**: receives status text and short-lived acknowledgments.

pub mod config;
pub mod domain;
pub mod voice;

pub use domain::*;
