use log::{debug, info};

use crate::common::types::{CleanedTags, CleaningReport, LinkConfig, Outcome};
use crate::errors::LinkResult;
use crate::generator::generate_links;
use crate::link_utils::{check_raw_url, extract_tags, ParsedUrl};
use crate::normalizer::TagNormalizer;

/// A validated master link with its cleaned tags.
#[derive(Debug, Clone)]
pub struct PreparedLink {
    pub parsed: ParsedUrl,
    pub raw_campaign: String,
    pub raw_content: String,
    pub tags: CleanedTags,
    pub report: CleaningReport,
}

pub fn prepare_link(raw_url: &str, normalizer: &TagNormalizer) -> LinkResult<PreparedLink> {
    check_raw_url(raw_url)?;
    let parsed = ParsedUrl::parse(raw_url)?;
    let (raw_campaign, raw_content) = extract_tags(&parsed)?;

    let (tags, report) = normalizer.clean(&raw_campaign, &raw_content);
    debug!(
        "Cleaned tags: campaign='{}' content='{}'",
        tags.campaign, tags.content
    );

    Ok(PreparedLink {
        parsed,
        raw_campaign,
        raw_content,
        tags,
        report,
    })
}

/// Validates everything, then generates. Any error happens before the
/// first record exists.
pub fn run(
    raw_url: &str,
    normalizer: &TagNormalizer,
    config: &LinkConfig,
) -> LinkResult<(PreparedLink, Outcome)> {
    let prepared = prepare_link(raw_url, normalizer)?;
    let outcome = generate_links(&prepared.parsed, &prepared.tags, config)?;

    if let Outcome::Generated(records) = &outcome {
        info!("{} link(s) generated", records.len());
    }

    Ok((prepared, outcome))
}
