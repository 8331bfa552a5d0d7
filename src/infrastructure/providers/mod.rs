//! # Provider Integrations
//!
//! Live estimate sources behind the [`EstimateSource`] port.
//!
//! ## Ports
//!
//! - [`EstimateSource`]: fold-to-empty estimate fetching
//!
//! ## Implementations
//!
//! - [`NammaYatriAdapter`]: two-phase search/estimates protocol
//!
//! Adapters own their transport concerns (timeouts, status handling,
//! payload validation) through [`HttpClient`] and [`ProviderError`];
//! nothing above this layer sees a provider failure.

pub mod error;
pub mod http_client;
pub mod namma_yatri;
pub mod traits;

pub use error::{ProviderError, ProviderResult};
pub use http_client::HttpClient;
pub use namma_yatri::NammaYatriAdapter;
pub use traits::EstimateSource;
