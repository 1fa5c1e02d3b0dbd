//! HTTP delivery layer for the product evaluation pipeline.

pub mod app;
