//! # ML Backgammon
//!
//! Backgammon rules engine whose core is an exhaustive legal-turn generator:
//! given a board, a player and a roll it returns every maximal turn the player
//! may play. Agents and a self-play runner sit on top of it.
//!
//! ## Modules
//!
//! - [`game`] — Core rules: board, player, move, roll, turn, turn generator, game state
//! - [`ai`] — Agent trait, random and greedy agents, board feature encoding
//! - [`play`] — Self-play games and match statistics
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod play;
