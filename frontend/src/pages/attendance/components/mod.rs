pub mod cell;
pub mod details_dialog;
pub mod filters;
pub mod grid;
pub mod legend;
pub mod mark_dialog;
