//! Output pipeline for resolved heads.

pub mod head;

pub use head::{HeadInjector, render_head};
