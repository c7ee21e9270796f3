//! Terminal presentation for the sidekick binary
//!
//! Design tokens live in `theme`; everything else is built from primitives
//! (icons, colored text, borders) up to blocks, widgets and per-command
//! views.

pub mod blocks;
pub mod ci;
pub mod context;
pub mod error;
pub mod json;
pub mod live_region;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
