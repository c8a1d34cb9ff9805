//! HTML backend for formwork: renders form schemas as HTML form markup.
//!
//! The generated markup uses Bootstrap-style class names (`form-control`,
//! `d-flex`, ...). A full document can embed a small stylesheet that gives
//! those classes their meaning without any external CSS.

mod escape;
mod generator;
pub mod style;

pub use generator::{HtmlOptions, to_html, to_html_with_options};
pub use style::{CompiledStyle, compile_container_style, compile_field_style};
