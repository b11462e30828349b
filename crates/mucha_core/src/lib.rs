//! Core data types for the Mucha social post studio.
//!
//! This crate provides the generation plumbing shared by every Mucha
//! interface: multimodal messages, requests, responses, and telemetry setup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod input;
mod media;
mod message;
mod output;
mod request;
mod role;
mod telemetry;

pub use input::Input;
pub use media::MediaSource;
pub use message::Message;
pub use output::Output;
pub use request::{GenerateRequest, GenerateResponse};
pub use role::Role;
pub use telemetry::{init_telemetry, shutdown_telemetry};
