//! Terminal UI: one screen per scene, keys turned into story events.

mod app;
mod screens;
mod theme;

pub use app::run;
