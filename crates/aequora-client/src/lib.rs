//! # aequora-client
//!
//! Thin HTTP client for the Aequora REST backend's notification
//! endpoints. The [`NotificationApi`] trait is the seam test doubles
//! plug into; [`ApiClient`] is the reqwest-backed implementation.

pub mod api;
pub mod http;

pub use api::{ApiClient, NotificationApi, NotificationPage};
