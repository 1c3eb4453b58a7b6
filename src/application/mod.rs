//! Application layer - Use cases, ports and DTOs
//!
//! Services here orchestrate the domain against outbound ports; infrastructure
//! supplies the port implementations.

pub mod dto;
pub mod ports;
pub mod services;
