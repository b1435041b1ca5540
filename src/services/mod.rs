//! Core services: identity resolution, parsing, and the query pipeline

pub mod alias;
pub mod export;
pub mod normalizer;
pub mod pipeline;
pub mod text;
pub mod trade;
