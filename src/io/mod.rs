// src/io/mod.rs
pub mod edges_json;
