//! Beru TUI - Terminal surface for the Beru chat widget
//!
//! A full-screen terminal front end that hosts a `beru_widget::ChatWidget`.
//! The widget owns the send flow; this crate only maps terminal events onto
//! widget events and draws the transcript.
//!
//! # Architecture
//!
//! - **App**: event loop, key/mouse mapping, rendering
//! - **Theme**: speaker colors and prefixes

pub mod app;
pub mod theme;

pub use app::App;
