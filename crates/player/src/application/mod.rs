//! Application layer: use-case services over the outbound ports.

pub mod dto;
pub mod error;
pub mod services;
