// UI module for the wallet viewer
// Pure rendering of App state; nothing here mutates the snapshot.

mod animations;
mod draw;
mod form;
mod holdings;
mod status;
mod utils;

// Re-export the public functions
pub use draw::draw;
