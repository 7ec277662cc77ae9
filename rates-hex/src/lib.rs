//! # Rates Hex
//!
//! Application services and terminal adapter for the currency converter.
//!
//! ## Architecture
//!
//! - `service/` - Startup orchestration and per-request conversion
//! - `inbound/` - Terminal shell adapter
//!
//! `RateService` is generic over the config, snapshot and rate source
//! ports, allowing different adapters to be injected.

pub mod inbound;
pub mod service;


pub use service::{ConversionService, RateService, parse_amount};
