// Library entry exposing parser modules.
pub mod core;
pub mod parser;
