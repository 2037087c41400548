//! core/score.rs
//! Bounded score model + the controller that ties it to the victory sound.
//!
//! - `ScoreBoard` = the score and everything the screen derives from it
//!   (display text, tint, whether the +/- buttons work)
//! - `ScoreController` = a board plus the (optional) victory sound
//!
//! No Iced imports. The GUI just renders whatever the board says.

use tracing::{debug, info, warn};

use super::bundle::Bundle;

/// Upper bound of the score, and also the winning score.
pub const MAX_SCORE: u8 = 15;

/// Key the score is saved under in the recreation bundle.
pub const SCORE_KEY: &str = "SCORE_KEY";

/// One button press on the +/- controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Add,
    Subtract,
}

impl Step {
    pub fn delta(self) -> i32 {
        match self {
            Step::Add => 1,
            Step::Subtract => -1,
        }
    }
}

/// Playable (score < MAX) vs Won (score == MAX).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playable,
    Won,
}

/// Color of the score text.
/// The GUI maps these onto real colors (black / green / blue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Normal,
    Win,
    Reset,
}

/// What a single step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing changed (already at MAX, or controls disabled).
    Ignored,
    /// Score changed (or was clamped) and is still below MAX.
    Moved(u8),
    /// This step was the win transition.
    Won,
}

#[derive(Debug, Clone)]
pub struct ScoreBoard {
    score: u8,
    display: String,
    tint: Tint,
    controls_enabled: bool,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::with_score(0)
    }
}

impl ScoreBoard {
    /// Board showing `score` (clamped to MAX).
    /// Phase, tint and controls follow from the score alone: a board built at MAX is Won.
    pub fn with_score(score: u8) -> Self {
        let score = score.min(MAX_SCORE);
        let won = score == MAX_SCORE;

        let mut board = Self {
            score,
            display: String::new(),
            tint: if won { Tint::Win } else { Tint::Normal },
            controls_enabled: !won,
        };
        board.refresh_display();
        board
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn tint(&self) -> Tint {
        self.tint
    }

    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    pub fn phase(&self) -> Phase {
        if self.score == MAX_SCORE {
            Phase::Won
        } else {
            Phase::Playable
        }
    }

    /// clamp(score + delta, 0, MAX), then update display/tint/controls.
    pub fn increment(&mut self, delta: i32) -> StepOutcome {
        if self.score == MAX_SCORE && delta > 0 {
            info!("Score cannot exceed {MAX_SCORE}");
            return StepOutcome::Ignored;
        }

        if !self.controls_enabled {
            info!("Controls are disabled until restart");
            return StepOutcome::Ignored;
        }

        let next = i32::from(self.score)
            .saturating_add(delta)
            .clamp(0, i32::from(MAX_SCORE));
        // clamp above keeps this in 0..=MAX_SCORE
        self.score = next as u8;
        self.refresh_display();

        if self.score == MAX_SCORE {
            info!("Player reached the winning score: {MAX_SCORE}");
            self.tint = Tint::Win;
            self.controls_enabled = false;
            StepOutcome::Won
        } else {
            self.tint = Tint::Normal;
            self.controls_enabled = true;
            StepOutcome::Moved(self.score)
        }
    }

    /// Back to 0 with the "reset" tint. Always succeeds.
    pub fn reset(&mut self) {
        self.score = 0;
        self.refresh_display();
        self.tint = Tint::Reset;
        self.controls_enabled = true;
        info!("Game restarted. Score reset.");
    }

    /// Write the current score into the display text.
    pub fn refresh_display(&mut self) {
        self.display = self.score.to_string();
        info!("Score updated to: {}", self.score);
    }
}

/// Anything that can play the victory sound once.
pub trait VictorySound {
    fn is_playing(&self) -> bool;
    fn start(&mut self);
}

/// The one controller per window: owns the board and the victory sound.
///
/// `sound` is `None` when muted or when audio failed to initialize.
pub struct ScoreController<S> {
    board: ScoreBoard,
    sound: Option<S>,
}

impl<S: VictorySound> ScoreController<S> {
    /// Fresh controller at score 0.
    pub fn new(sound: Option<S>) -> Self {
        Self::restore(None, sound)
    }

    /// Rebuild from a saved bundle (if any). Missing bundle/key -> 0.
    ///
    /// Restoring is not a win transition: a restored 15 shows as Won but stays silent.
    pub fn restore(saved: Option<&Bundle>, sound: Option<S>) -> Self {
        let score = match saved {
            Some(bundle) => {
                let raw = bundle.get_int(SCORE_KEY, 0);
                let clamped = raw.clamp(0, i32::from(MAX_SCORE));
                if clamped != raw {
                    warn!("Saved score {raw} out of range, using {clamped}");
                }
                info!("Score restored: {clamped}");
                clamped as u8
            }
            None => 0,
        };

        let board = ScoreBoard::with_score(score);
        debug!("Starting in phase {:?}", board.phase());

        Self { board, sound }
    }

    pub fn board(&self) -> &ScoreBoard {
        &self.board
    }

    pub fn sound(&self) -> Option<&S> {
        self.sound.as_ref()
    }

    pub fn sound_mut(&mut self) -> Option<&mut S> {
        self.sound.as_mut()
    }

    pub fn increment(&mut self, delta: i32) -> StepOutcome {
        let outcome = self.board.increment(delta);
        if outcome == StepOutcome::Won {
            self.play_victory_sound();
        }
        outcome
    }

    pub fn step(&mut self, step: Step) -> StepOutcome {
        self.increment(step.delta())
    }

    pub fn reset(&mut self) {
        self.board.reset();
    }

    pub fn save_instance_state(&self, out: &mut Bundle) {
        out.put_int(SCORE_KEY, i32::from(self.board.score()));
        debug!("Score saved: {}", self.board.score());
    }

    /// Drop the sound player (which releases its audio resources).
    /// Returns false if there was nothing to release.
    pub fn release_sound(&mut self) -> bool {
        self.sound.take().is_some()
    }

    fn play_victory_sound(&mut self) {
        let Some(sound) = self.sound.as_mut() else {
            return;
        };
        if !sound.is_playing() {
            sound.start();
        }
    }
}
