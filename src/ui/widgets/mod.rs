pub mod panel;
pub mod spinner;
