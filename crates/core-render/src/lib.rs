//! Frame composition for the terminal.
//!
//! - `writer`: ordered terminal commands encoded into one byte buffer.
//! - `status`: status bar and message bar text.
//! - `render_engine`: assembles the full frame from the editor state and view
//!   and hands it to the backend in one write.

pub mod render_engine;
pub mod status;
pub mod writer;

pub use render_engine::RenderEngine;
