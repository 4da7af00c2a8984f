//! Inference gateway

pub mod client;

pub use client::{InferenceClient, InferenceError};
