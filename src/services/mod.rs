// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod movie_store;

#[cfg(test)]
mod movie_store_tests;

pub use movie_store::MovieStore;
