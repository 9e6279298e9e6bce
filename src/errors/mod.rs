//! Error types and error handling for the lexer.
//!
//! This module defines the single error type returned by grammar
//! construction and scanning. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants (unrecognised characters, bad patterns, limits)
//! - Error formatting and helpful suggestions

pub mod errors;
