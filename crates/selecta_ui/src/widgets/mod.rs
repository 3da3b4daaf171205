// Widget implementations

mod dropdown;

pub use dropdown::{Dropdown, DropdownBuilder, DropdownTexts};
