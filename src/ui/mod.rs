//! Terminal rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → Canvas → stdout
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready snapshot of the state
//! - [`renderer`]: Frame entry point
//! - [`components`]: One renderer per UI section
//! - [`helpers`]: Output buffer, width and highlight utilities
//! - [`theme`]: Palettes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_frame};
pub use theme::{Theme, ThemeColors, ThemeSet};
pub use viewmodel::{
    ControlsInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, PromptInfo, SearchBarInfo,
    UIViewModel,
};
