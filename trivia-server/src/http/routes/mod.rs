//! Route handlers organized by resource

pub mod categories;
pub mod questions;
pub mod quiz;
