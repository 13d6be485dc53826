//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component layout

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with `print!`. Does not clear the screen; the
/// host does that before each render call.
///
/// # Example
///
/// ```rust
/// use movieseek::{initialize, Config};
/// use movieseek::ui::render;
///
/// let state = initialize(&Config::default());
/// render(&state, 24, 80);
/// ```
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    tracing::trace!(
        items = viewmodel.display_items.len(),
        modal = viewmodel.modal.is_some(),
        "rendering view model"
    );
    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
