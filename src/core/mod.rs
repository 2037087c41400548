//! core/mod.rs
//!
//! Everything that isn't drawing:
//! - the bounded score + its controller (score)
//! - the recreation bundle (bundle)
//! - the victory sound player (playback)
//!
//! The GUI holds one `ScoreController<VictoryPlayer>` and renders its board.

pub mod bundle;
pub mod error;
pub mod playback;
pub mod score;
