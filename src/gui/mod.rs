//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('Contest')
//! - messages ('Message')
//! - update logic ('update()'), including boot + close handling
//! - view layout ('view()')
//! - subscriptions (close requests, polling sound events)

pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use subscription::subscription;
pub(crate) use update::{boot, update};
pub(crate) use view::constants::{WINDOW_H, WINDOW_W};
pub(crate) use view::view;
