//! Domain registration tools backed by the upstream domain API.

pub mod availability;
pub mod client;
pub mod prices;

pub use availability::{CheckDomainAvailabilityParams, CheckDomainAvailabilityTool};
pub use client::{DomainApiClient, DomainApiError};
pub use prices::{GetDomainPricesParams, GetDomainPricesTool};
