pub mod editor;
pub mod eval;
