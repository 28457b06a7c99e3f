//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `LoanEngine`, the primary entry point for
//! quoting payments and managing customers and their loan offers on top of
//! the boxed store ports.

pub mod engine;
