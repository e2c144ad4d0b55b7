//! # clima-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **front** API (`POST /cep`, `GET /health`) and the **back**
//!   API (`GET /weather/{zipcode}`, `GET /health`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map the error taxonomy into status codes and `{"error": …}` bodies
//! - Extract the inbound `traceparent` header (or start a new root) so the
//!   pipeline always runs inside a propagated trace context
//!
//! ## Dependency rule
//! Depends on `clima-app` (for port traits and services) and `clima-domain`
//! (for domain types used in request/response mapping). Never leaks axum
//! types into the domain.

pub mod back;
pub mod error;
pub mod front;
pub mod state;
pub mod trace;
