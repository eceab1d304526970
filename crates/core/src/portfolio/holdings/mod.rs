pub mod holdings_mapper;
pub mod holdings_model;
pub mod holdings_service;


pub use holdings_mapper::{map_to_domain, map_to_domain_list};
pub use holdings_model::{Holding, HoldingSummary};
pub use holdings_service::{HoldingsService, HoldingsServiceTrait};
