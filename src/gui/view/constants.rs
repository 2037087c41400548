//! View constants (layout/sizing).

pub(crate) const WINDOW_W: f32 = 360.0;
pub(crate) const WINDOW_H: f32 = 480.0;

pub(crate) const PADDING: f32 = 24.0;
pub(crate) const SECTION_SPACING: f32 = 24.0;

pub(crate) const LABEL_TEXT: f32 = 22.0;
pub(crate) const SCORE_TEXT: f32 = 96.0;
pub(crate) const BUTTON_TEXT: f32 = 28.0;

pub(crate) const STEP_BUTTON_W: f32 = 96.0;
pub(crate) const RESTART_BUTTON_W: f32 = 216.0;
