//! # Infrastructure Layer
//!
//! Outward-facing adapters. Everything that talks to the network lives
//! here, behind ports defined next to the adapters; the domain and
//! application layers depend only on those ports.

pub mod providers;
