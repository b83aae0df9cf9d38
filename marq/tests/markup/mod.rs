//! End-to-end tests for the markup -> HTML conversion.

mod config;
mod documents;
mod edge;
mod inline;
mod nesting;
mod properties;
