//! # Application Layer
//!
//! Use-case orchestration over the domain and infrastructure layers:
//! running a comparison and turning a chosen estimate into a booking
//! redirect.

pub mod services;
