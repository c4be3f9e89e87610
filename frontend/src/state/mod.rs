pub mod diagnostics;
pub mod load_state;
