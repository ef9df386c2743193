//! Shared test utilities for the locsync workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`]: git repository fixtures
//! - [`project`]: [`project::TestProject`], a temporary project tree with a
//!   sibling remote directory and `.strings` helpers

pub mod git;
pub mod project;
