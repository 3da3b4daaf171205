//! Reusable demo components for examples and the terminal host

mod dropdown;
mod simulated;

pub use dropdown::{
    sample_options, DemoSettings, DemoSlot, DropdownDemo, DropdownMessage, SelectionLog,
};
pub use simulated::simulated_search;
