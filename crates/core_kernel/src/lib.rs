//! Core Kernel - Foundational parsing utilities for the FNOL intake system
//!
//! This crate provides the lenient scalar handling shared by the document
//! model and the ingest boundary:
//! - Civil-date parsing across the formats extraction output produces
//! - Monetary-amount parsing with precise decimal arithmetic

pub mod amount;
pub mod temporal;

pub use amount::{amount_from_value, lenient_amount_opt, parse_lenient_amount};
pub use temporal::{lenient_date_opt, parse_lenient_date};
