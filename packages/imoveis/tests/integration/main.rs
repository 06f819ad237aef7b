mod common;
mod import;
mod repository;
