//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to the component layout.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the screen layout
//!
//! Output goes to stdout as ANSI escape sequences; the caller is responsible
//! for raw mode, the alternate screen, and flushing.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers;

/// Renders the full application UI to stdout.
///
/// Clears the screen, computes the view model from the current state, and
/// draws one frame at the given terminal dimensions.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    helpers::clear_screen();
    components::render_screen(&viewmodel, &state.theme, cols, rows);
}
