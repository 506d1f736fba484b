//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod analytics;
pub mod cards;
pub mod footer;
pub mod header;
pub mod logs;
pub mod signals;
pub mod status_views;
pub mod tabs;
pub mod wallets;
