//! UI components for the MaxWave frontend.

pub mod auth;
pub mod common;
pub mod icon;
pub mod pages;
pub mod theme;

pub use icon::{Icon, icons};
