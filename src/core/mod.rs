pub mod app;
pub mod bionic;
pub mod cli;
pub mod config;
pub mod paths;
pub mod persistence;
pub mod render;
