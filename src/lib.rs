//! Asterfield — a classic rock-splitting arcade shooter.
//!
//! Game logic is exposed as a library so the binary stays a thin wiring
//! layer and tests can drive everything headlessly.

pub mod asteroid;
pub mod audio;
pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
pub mod hud;
pub mod particles;
pub mod player;
pub mod rendering;
pub mod spawner;
