//! Madlib sessions.
//!
//! - **engine.rs**: `Madlib` (parsed template and its blanks), substitution
//!   and rendering
//! - **interactive.rs**: the prompt loop driven through a `Prompter`

mod engine;
mod interactive;


// Re-export public API
pub use engine::{Blank, Madlib, render};
pub use interactive::run;
