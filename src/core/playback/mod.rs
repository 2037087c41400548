//! core/playback/mod.rs
//! Victory sound playback.
//!
//! rodio's output stream lives on its own engine thread (see engine.rs).
//! The GUI side only holds a `VictoryPlayer`: a command sender plus an
//! event receiver.

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use rodio::Decoder;
use tracing::{debug, info, warn};

use super::error::{ContestError, Result};
use super::score::VictorySound;

mod engine;

use engine::PlaybackEngine;

const BUNDLED_VICTORY_SOUND: &[u8] = include_bytes!("../../../assets/victory_sound.wav");

/// Encoded sound bytes, shared cheaply with the engine thread.
#[derive(Clone)]
pub struct SoundAsset {
    bytes: Arc<[u8]>,
}

impl SoundAsset {
    /// The fanfare compiled into the binary.
    pub fn bundled() -> Self {
        Self {
            bytes: Arc::from(BUNDLED_VICTORY_SOUND),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self {
            bytes: Arc::from(bytes),
        })
    }

    /// Fresh decoder over the asset. One per play.
    pub fn decoder(&self) -> Result<Decoder<Cursor<Arc<[u8]>>>> {
        Ok(Decoder::new(Cursor::new(Arc::clone(&self.bytes)))?)
    }

    /// Fail early if the bytes are not a sound rodio can decode.
    pub fn validate(&self) -> Result<()> {
        self.decoder().map(|_| ())
    }
}

#[derive(Debug)]
pub enum PlayerCommand {
    Play,
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    Started,
    Finished,
    Error(String),
}

/// Handle to the engine thread.
///
/// Dropping it shuts the engine down and joins the thread, so the audio
/// device is released exactly once no matter how the window goes away.
pub struct VictoryPlayer {
    command_tx: Sender<PlayerCommand>,
    events: Receiver<PlayerEvent>,
    engine: Option<JoinHandle<()>>,
    playing: bool,
}

impl VictoryPlayer {
    /// Validate the asset, spawn the engine thread, and wait until it has
    /// opened the output device (or failed to).
    pub fn spawn(asset: SoundAsset) -> Result<Self> {
        asset.validate()?;

        let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>();
        let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();
        let (ready_tx, ready_rx) = mpsc::sync_channel::<Result<()>>(1);

        let engine = thread::Builder::new()
            .name("victory-sound".into())
            .spawn(move || {
                let mut engine = match PlaybackEngine::new(asset, event_tx) {
                    Ok(e) => e,
                    Err(e) => {
                        let _ = ready_tx.send(Err(e));
                        return;
                    }
                };
                let _ = ready_tx.send(Ok(()));

                engine.run(command_rx);
            })?;

        if let Err(e) = await_ready(&ready_rx) {
            let _ = engine.join();
            return Err(e);
        }

        info!("Victory sound loaded");
        Ok(Self::from_parts(command_tx, event_rx, engine))
    }

    fn from_parts(
        command_tx: Sender<PlayerCommand>,
        events: Receiver<PlayerEvent>,
        engine: JoinHandle<()>,
    ) -> Self {
        Self {
            command_tx,
            events,
            engine: Some(engine),
            playing: false,
        }
    }

    /// Apply every pending engine event to `playing`.
    pub fn drain_events(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(PlayerEvent::Started) => {
                    debug!("Victory sound started");
                    self.playing = true;
                }
                Ok(PlayerEvent::Finished) => {
                    debug!("Victory sound finished");
                    self.playing = false;
                }
                Ok(PlayerEvent::Error(msg)) => {
                    warn!("Victory sound error: {msg}");
                    self.playing = false;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.playing {
                        warn!("Audio engine stopped while the victory sound was playing");
                    }
                    self.playing = false;
                    break;
                }
            }
        }
    }

    fn shutdown(&mut self) {
        let Some(engine) = self.engine.take() else {
            return;
        };

        // Engine may already be gone (panicked); that's fine.
        let _ = self.command_tx.send(PlayerCommand::Shutdown);
        if engine.join().is_err() {
            warn!("Audio engine thread panicked");
        }

        self.playing = false;
        info!("Media resources released.");
    }
}

/// Startup handshake result. Disconnected without a message = the thread died.
fn await_ready(ready_rx: &Receiver<Result<()>>) -> Result<()> {
    ready_rx.recv().unwrap_or(Err(ContestError::EngineGone))
}

impl VictorySound for VictoryPlayer {
    fn is_playing(&self) -> bool {
        self.playing
    }

    fn start(&mut self) {
        if self.command_tx.send(PlayerCommand::Play).is_ok() {
            self.playing = true;
        } else {
            warn!("Audio engine is not running; skipping victory sound");
        }
    }
}

impl Drop for VictoryPlayer {
    fn drop(&mut self) {
        self.shutdown();
    }
}
