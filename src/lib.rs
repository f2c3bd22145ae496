//! Cartoni
//!
//! Paper-stock inventory: supplier registry, pending orders, stock on hand,
//! exhausted stock and the movement history, with the tab views that render
//! them and the host service that owns the state.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod views;

pub use errors::ServiceError;
pub use models::{
    ArticoloEsaurito, ArticoloGiacenza, FiltroStorico, Fornitore, Magazzino, OrdineAttesa,
    StoricoMovimento, TipoMovimento,
};
pub use services::{MagazzinoService, Riepilogo};
