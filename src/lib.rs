//! Simulation core of a 2D arcade shooter.
//!
//! `engine::GameEngine` owns the player, enemies and bullets and advances
//! them one frame per `tick`.  Rendering, input and sound stay outside; they
//! feed `engine::Intents` in and receive `engine::GameListener` callbacks.

pub mod bullets;
pub mod collision;
pub mod config;
pub mod enemies;
pub mod engine;
pub mod entities;
pub mod error;
pub mod player;
pub mod progression;
