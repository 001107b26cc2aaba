//! FaceX gateway
//!
//! HTTP facade over the FaceX face-recognition backend. Photos are uploaded
//! for pairwise comparison or gallery search; FaceX's asynchronous,
//! result-code driven responses are polled and normalized into a small
//! JSON API.

pub mod app_state;
pub mod config;
pub mod facex;
pub mod models;
pub mod routes;
pub mod services;
