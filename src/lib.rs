//! Terminal viewer for the fungible tokens and NFTs held by a wallet.
//!
//! The [`wallet::WalletClient`] runs the read-only fetch pipeline, [`app::App`]
//! owns the on-screen snapshot, and [`ui::draw`] renders it.

pub mod app;
pub mod chain;
pub mod config;
pub mod constants;
pub mod error;
pub mod ui;
pub mod utils;
pub mod wallet;
