//! IndieSight: content-based game recommendations.
//!
//! A user's owned games are averaged into a taste profile, every catalog game
//! is scored by Manhattan distance from that profile, and the distances are
//! normalized into a 0-100 score. The engine itself lives in [`services`] and
//! works on plain in-memory snapshots; [`store`] and [`api`] are the glue that
//! loads data and serves it over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod store;
