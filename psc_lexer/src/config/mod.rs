//! Configuration for the PSC lexer
//!
//! Compile-time security boundaries live in `constants`; runtime user
//! preferences (env-var defaulted) live in `runtime`.

pub mod constants;
pub mod runtime;
