//! Shared rendering code: inline markup stripping and block body formatting.

pub mod content;
pub mod inline;
