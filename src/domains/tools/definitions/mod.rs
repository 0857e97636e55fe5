//! Tool definitions module.
//!
//! Each tool is defined in its own file for better maintainability.

pub mod add;
pub mod document;
pub mod domain;

pub use add::{AddParams, AddTool};
pub use document::{DocumentTool, DocumentToolParams};
pub use domain::{
    CheckDomainAvailabilityParams, CheckDomainAvailabilityTool, DomainApiClient, DomainApiError,
    GetDomainPricesParams, GetDomainPricesTool,
};
