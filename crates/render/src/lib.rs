//! HTML rendering for the portfolio service.
//!
//! The job card is a Jinja template rendered with minijinja. The template
//! is compiled once at startup; requests only render it.

pub mod error;
pub mod renderer;

pub use error::{RenderError, TemplateError};
pub use renderer::{PAGE_TEMPLATE, PageRenderer};
