//! core/playback/engine.rs
//! Playback engine (rodio owner).
//!
//! Owns:
//! - OutputStream (must stay alive)
//! - Sink (only while the fanfare is playing)
//! - command loop + periodic "finished?" ticks
//!
//! Emits PlayerEvent back via a channel.
//! No Iced imports.

use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::debug;

use super::{PlayerCommand, PlayerEvent, SoundAsset};
use crate::core::error::Result;

const TICK_MS: u64 = 100;

pub(super) struct PlaybackEngine {
    // Keep this alive for the lifetime of the engine!
    stream: OutputStream,

    sink: Option<Sink>,
    asset: SoundAsset,

    event_tx: Sender<PlayerEvent>,
}

impl PlaybackEngine {
    pub(super) fn new(asset: SoundAsset, event_tx: Sender<PlayerEvent>) -> Result<Self> {
        let stream = OutputStreamBuilder::open_default_stream()?;

        Ok(Self {
            stream,
            sink: None,
            asset,
            event_tx,
        })
    }

    pub(super) fn run(&mut self, command_rx: Receiver<PlayerCommand>) {
        let tick = Duration::from_millis(TICK_MS);

        loop {
            match command_rx.recv_timeout(tick) {
                Ok(cmd) => {
                    if self.handle_command(cmd) {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            self.tick();
        }

        self.stop_internal();
    }

    /// Returns true on Shutdown.
    fn handle_command(&mut self, cmd: PlayerCommand) -> bool {
        match cmd {
            PlayerCommand::Play => {
                if self.is_playing() {
                    debug!("Victory sound already playing");
                } else if let Err(e) = self.play() {
                    let _ = self.event_tx.send(PlayerEvent::Error(e.to_string()));
                }
            }
            PlayerCommand::Shutdown => return true,
        }

        false
    }

    fn is_playing(&self) -> bool {
        self.sink.as_ref().is_some_and(|sink| !sink.empty())
    }

    fn tick(&mut self) {
        if self.sink.is_some() && !self.is_playing() {
            self.sink = None;
            let _ = self.event_tx.send(PlayerEvent::Finished);
        }
    }

    fn play(&mut self) -> Result<()> {
        self.stop_internal();

        // rodio 0.21.x: Sink is created from the stream's mixer
        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(self.asset.decoder()?);
        sink.play();

        self.sink = Some(sink);
        let _ = self.event_tx.send(PlayerEvent::Started);

        Ok(())
    }

    fn stop_internal(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}
