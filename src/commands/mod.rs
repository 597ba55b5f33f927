//! Command handlers for the snapdiff binary

pub mod diff;
