//! Intermediate Representation (IR) for report documents.
//!
//! This module defines the format-agnostic document that the assembler
//! builds through the [`DocumentSink`](crate::sink::DocumentSink) trait and
//! that every output format serializes from.

pub mod nodes;
