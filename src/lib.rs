pub mod cli_args;
pub mod common;
pub mod errors;
pub mod generator;
pub mod link_utils;
pub mod normalizer;
pub mod pipeline;
pub mod settings;
pub mod sheet_renderer;

pub use common::types::{
    CleanedTags, CleaningReport, DistributionMode, FormatKind, LinkConfig, LinkRecord, Outcome,
};
pub use errors::{LinkError, LinkResult};
pub use normalizer::{CampaignPolicy, ContentPolicy, TagNormalizer};
pub use pipeline::{prepare_link, run, PreparedLink};
