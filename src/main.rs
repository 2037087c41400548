//! The Contest
//!
//! # What this program is
//! A one-screen desktop app (built with `iced`) that keeps a score between 0 and 15.
//! "+" and "−" move the score, "Restart" sets it back to 0. Hitting 15 wins:
//! the number turns green, +/- stop working, and a short fanfare plays.
//!
//! # How Iced works (super simple mental model)
//! - `Contest` = the whole memory of the app
//! - `Message` = “something happened” (button clicked, window closing)
//! - `update(state, message)` = handles that thing and updates state
//! - `view(state)` = draws UI based on the current state
//!
//! **Message happens -> update changes state -> view redraws**
//!
//! # Lifetime of the screen
//! - Boot: read the saved score (if any) and start the sound engine.
//! - Close: save the score into a small temp file, release the sound, exit.
//!
//! # Concurrency model
//! - Score changes happen right inside `update()`, nothing async.
//! - rodio's output stream lives on a separate engine thread; the GUI
//!   talks to it through channels (see `core::playback`).

mod config;
mod core;
mod gui;
mod logging;

use clap::Parser;
use iced::{Size, window};
use tracing::error;

use crate::config::{CliArgs, ContestConfig};

fn main() -> iced::Result {
    let args = CliArgs::parse();
    logging::init_logger(args.verbose);

    let config = match ContestConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    iced::application(move || gui::boot(&config), gui::update, gui::view)
        .title("The Contest")
        .subscription(gui::subscription)
        .window(window::Settings {
            size: Size::new(gui::WINDOW_W, gui::WINDOW_H),
            // Close goes through Message::CloseRequested so we can save first.
            exit_on_close_request: false,
            ..window::Settings::default()
        })
        .run()
}
