//! Payloads the application sends back to Discord.

pub mod interaction;
