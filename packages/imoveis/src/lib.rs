pub mod config;
pub mod database;
pub mod entity;
pub mod import;
pub mod repository;
