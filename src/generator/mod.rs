use log::debug;

mod distribution;
mod formatting;

pub use distribution::distribute;
pub use formatting::{join_content, numbered_identifier};

use crate::common::constants::{CAMPAIGN_PARAM, CONTENT_PARAM, ORIGINAL_IDENTIFIER};
use crate::common::types::{CleanedTags, FormatKind, LinkConfig, LinkRecord, Outcome};
use crate::errors::{LinkError, LinkResult};
use crate::link_utils::ParsedUrl;

/// Rejects configurations that cannot be generated. Nothing requested is
/// not an error here; see [`generate_links`].
pub fn validate_config(config: &LinkConfig) -> LinkResult<()> {
    if config.bases.is_empty() {
        return Err(LinkError::NoBaseSelected);
    }

    if !config.numbered_kinds().is_empty() {
        let max = config.mode.max_quantity();
        if config.quantity == 0 || config.quantity > max {
            return Err(LinkError::InvalidQuantity {
                quantity: config.quantity,
                max,
            });
        }
    }

    Ok(())
}

/// Builds every link record for `config`. Validation happens up front; once
/// it passes, generation cannot fail.
pub fn generate_links(
    parsed: &ParsedUrl,
    tags: &CleanedTags,
    config: &LinkConfig,
) -> LinkResult<Outcome> {
    validate_config(config)?;

    if config.nothing_requested() {
        debug!("No link type enabled, nothing to generate");
        return Ok(Outcome::NothingRequested);
    }

    Ok(Outcome::Generated(
        LinkGenerator::new(parsed, tags).generate(config),
    ))
}

pub struct LinkGenerator<'a> {
    parsed: &'a ParsedUrl,
    tags: &'a CleanedTags,
}

impl<'a> LinkGenerator<'a> {
    pub fn new(parsed: &'a ParsedUrl, tags: &'a CleanedTags) -> Self {
        Self { parsed, tags }
    }

    /// Base links first, then each numbered kind in declared order.
    pub fn generate(&self, config: &LinkConfig) -> Vec<LinkRecord> {
        let mut records = Vec::new();

        if config.generate_base_link {
            self.push_base_links(&config.bases, &mut records);
        }

        for kind in config.numbered_kinds() {
            self.push_numbered_links(kind, config, &mut records);
        }

        debug!("Generated {} link record(s)", records.len());
        records
    }

    fn push_base_links(&self, bases: &[String], records: &mut Vec<LinkRecord>) {
        for base in bases {
            records.push(self.build_record(
                FormatKind::Base,
                ORIGINAL_IDENTIFIER.to_string(),
                base,
                &self.tags.content,
            ));
        }
    }

    fn push_numbered_links(
        &self,
        kind: FormatKind,
        config: &LinkConfig,
        records: &mut Vec<LinkRecord>,
    ) {
        let slots = distribute(&config.bases, config.quantity, config.mode);
        debug!(
            "Generating {} '{}' link(s) in {:?} mode",
            slots.len(),
            kind.marker(),
            config.mode
        );

        for (index, base) in slots {
            let identifier = numbered_identifier(kind, index);
            let content = join_content(&identifier, &self.tags.content);
            records.push(self.build_record(kind, identifier, base, &content));
        }
    }

    fn build_record(
        &self,
        kind: FormatKind,
        identifier: String,
        base: &str,
        content: &str,
    ) -> LinkRecord {
        let campaign = format!("{}{}", self.tags.campaign, base);
        let url = self
            .parsed
            .with_replaced(&[(CAMPAIGN_PARAM, campaign.as_str()), (CONTENT_PARAM, content)]);

        LinkRecord {
            kind,
            identifier,
            base: base.to_string(),
            url,
        }
    }
}
