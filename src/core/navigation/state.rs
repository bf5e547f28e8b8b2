use crate::core::data::complex::Complex;
use crate::core::data::view_params::ViewParameters;

/// The animated quantities of a view, as currently displayed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub center: Complex,
    pub scale: f64,
    pub constant: Complex,
    pub max_iterations: u32,
}

/// Where [`ViewState`] is heading; commands only ever edit targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTargets {
    pub center: Complex,
    pub scale: f64,
    pub constant: Complex,
    pub max_iterations: u32,
}

impl From<&ViewParameters> for ViewState {
    fn from(view: &ViewParameters) -> Self {
        Self {
            center: view.center(),
            scale: view.scale(),
            constant: view.constant(),
            max_iterations: view.max_iterations(),
        }
    }
}

impl From<ViewState> for ViewTargets {
    fn from(state: ViewState) -> Self {
        Self {
            center: state.center,
            scale: state.scale,
            constant: state.constant,
            max_iterations: state.max_iterations,
        }
    }
}
