// Library exports for bashmenu components

pub mod app;
pub mod colors;
pub mod config;
pub mod error;
pub mod menu;
pub mod runner;
