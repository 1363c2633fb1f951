use log::debug;
use regex::Regex;
use std::sync::OnceLock;

use super::url_ops::ParsedUrl;
use crate::common::constants::{ACCEPTED_SCHEMES, CAMPAIGN_PARAM, CONTENT_PARAM};
use crate::errors::{LinkError, LinkResult};

static INVALID_CONTENT_RE: OnceLock<Regex> = OnceLock::new();

fn invalid_content_re() -> &'static Regex {
    INVALID_CONTENT_RE
        .get_or_init(|| Regex::new(r"[^a-zA-Z0-9\-_=]").expect("content character class"))
}

/// Checks that happen on the raw string, before any URL grammar is applied.
pub fn check_raw_url(raw: &str) -> LinkResult<()> {
    if raw.chars().any(char::is_whitespace) {
        return Err(LinkError::InvalidUrl("the link contains whitespace".to_string()));
    }

    if !ACCEPTED_SCHEMES.iter().any(|scheme| raw.starts_with(scheme)) {
        return Err(LinkError::InvalidUrl(
            "the link must start with 'http://' or 'https://'".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_content_chars(content: &str) -> LinkResult<()> {
    if invalid_content_re().is_match(content) {
        return Err(LinkError::InvalidContentCharacters(content.to_string()));
    }
    Ok(())
}

/// Returns the raw `(utm_campaign, utm_content)` values of a parsed link.
pub fn extract_tags(parsed: &ParsedUrl) -> LinkResult<(String, String)> {
    let campaign = parsed
        .first_value(CAMPAIGN_PARAM)
        .filter(|v| !v.is_empty())
        .ok_or(LinkError::MissingCampaignTag)?;

    let content = parsed
        .first_value(CONTENT_PARAM)
        .filter(|v| !v.is_empty())
        .ok_or(LinkError::MissingContentTag)?;

    validate_content_chars(content)?;

    debug!("Raw tags: campaign='{}' content='{}'", campaign, content);
    Ok((campaign.to_string(), content.to_string()))
}
