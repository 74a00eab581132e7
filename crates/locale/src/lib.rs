//! Language negotiation for incoming requests.
//!
//! Picks one supported language from an explicit `lang` query parameter
//! and the `Accept-Language` header. Everything here is pure and
//! allocation-light so it can run on every request.

pub mod accept_language;
pub mod resolver;

pub use accept_language::{LanguageRange, parse_accept_language};
pub use resolver::resolve;
