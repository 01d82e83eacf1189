//! Intake - lead capture backend for the CodeCraft Labs and Academic Assist
//! marketing sites.
//!
//! The crate exposes the form schema descriptors, the request-form wizard,
//! the submission gateway and the REST backend as a library; `main.rs` wires
//! them into the `intake` binary.

pub mod config;
pub mod forms;
pub mod gateway;
pub mod logging;
pub mod notify;
pub mod rest;
pub mod store;
pub mod types;
pub mod wizard;
