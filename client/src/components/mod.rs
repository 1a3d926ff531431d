pub mod effect_layer;
pub mod error_boundary;
pub mod fault_panel;
pub mod site_shell;
