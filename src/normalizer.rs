use clap::ValueEnum;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::sync::OnceLock;

use crate::common::types::{CleanedTags, CleaningReport};

/// How a previously applied base is removed from `utm_campaign`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CampaignPolicy {
    /// Strip catalog entries found at the end, longest first
    #[default]
    KnownSuffixes,
    /// Strip everything from the first `_base` marker on
    MarkerPattern,
}

/// How a previous format decoration is removed from `utm_content`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ContentPolicy {
    /// Strip a leading `botao_N` / `img-N` / `hiperlinkN`
    #[default]
    PrefixStrip,
    /// Keep only the trailing `-N` run
    SuffixExtract,
}

static BASE_MARKER_RE: OnceLock<Regex> = OnceLock::new();
static FORMAT_PREFIX_RE: OnceLock<Regex> = OnceLock::new();
static NUMERIC_SUFFIX_RE: OnceLock<Regex> = OnceLock::new();

fn base_marker_re() -> &'static Regex {
    BASE_MARKER_RE.get_or_init(|| Regex::new(r"(?i)_base").expect("base marker pattern"))
}

fn format_prefix_re() -> &'static Regex {
    FORMAT_PREFIX_RE.get_or_init(|| {
        Regex::new(r"(?i)^(botao|img|hiperlink)[-_]?\d+").expect("format prefix pattern")
    })
}

fn numeric_suffix_re() -> &'static Regex {
    NUMERIC_SUFFIX_RE.get_or_init(|| Regex::new(r"-?\d+$").expect("numeric suffix pattern"))
}

/// Cleans raw campaign/content tags with the configured policies. The base
/// catalog is held longest-first so a short tag never wins over a longer
/// one that ends the same way.
#[derive(Debug, Clone)]
pub struct TagNormalizer {
    catalog: Vec<String>,
    campaign_policy: CampaignPolicy,
    content_policy: ContentPolicy,
}

impl TagNormalizer {
    pub fn new(
        catalog: &[String],
        campaign_policy: CampaignPolicy,
        content_policy: ContentPolicy,
    ) -> Self {
        let mut catalog: Vec<String> = catalog
            .iter()
            .filter(|b| !b.is_empty())
            .cloned()
            .collect();
        catalog.sort_by_key(|b| Reverse(b.len()));

        Self {
            catalog,
            campaign_policy,
            content_policy,
        }
    }

    pub fn clean_campaign(&self, campaign: &str) -> (String, Option<String>) {
        match self.campaign_policy {
            CampaignPolicy::KnownSuffixes => strip_known_suffixes(campaign, &self.catalog),
            CampaignPolicy::MarkerPattern => strip_base_marker(campaign),
        }
    }

    pub fn clean_content(&self, content: &str) -> (String, Option<String>) {
        match self.content_policy {
            ContentPolicy::PrefixStrip => strip_format_prefix(content),
            ContentPolicy::SuffixExtract => extract_numeric_suffix(content),
        }
    }

    pub fn clean(&self, campaign: &str, content: &str) -> (CleanedTags, CleaningReport) {
        let (campaign, removed_base) = self.clean_campaign(campaign);
        let (content, removed_format) = self.clean_content(content);

        (
            CleanedTags { campaign, content },
            CleaningReport {
                removed_base,
                removed_format,
            },
        )
    }
}

/// `catalog` must be sorted longest first. Stripping repeats until no entry
/// ends the campaign, so stacked bases all go.
pub fn strip_known_suffixes(campaign: &str, catalog: &[String]) -> (String, Option<String>) {
    let mut current = campaign;

    while let Some(base) = catalog
        .iter()
        .find(|b| !b.is_empty() && current.ends_with(b.as_str()))
    {
        debug!("Campaign '{}' ends with known base '{}'", current, base);
        current = &current[..current.len() - base.len()];
    }

    if current.len() == campaign.len() {
        (campaign.to_string(), None)
    } else {
        (
            current.to_string(),
            Some(campaign[current.len()..].to_string()),
        )
    }
}

pub fn strip_base_marker(campaign: &str) -> (String, Option<String>) {
    match base_marker_re().find(campaign) {
        Some(m) => {
            debug!("Campaign '{}' has base marker at {}", campaign, m.start());
            (
                campaign[..m.start()].to_string(),
                Some(campaign[m.start()..].to_string()),
            )
        }
        None => (campaign.to_string(), None),
    }
}

/// The pattern is anchored, so each pass removes one leading decoration;
/// passes repeat until the content no longer starts with one.
pub fn strip_format_prefix(content: &str) -> (String, Option<String>) {
    let re = format_prefix_re();
    let mut current = content;

    while let Some(m) = re.find(current) {
        debug!("Content '{}' starts with format '{}'", current, m.as_str());
        current = &current[m.end()..];
    }

    if current.len() == content.len() {
        (content.to_string(), None)
    } else {
        let removed = &content[..content.len() - current.len()];
        (current.to_string(), Some(removed.to_string()))
    }
}

pub fn extract_numeric_suffix(content: &str) -> (String, Option<String>) {
    match numeric_suffix_re().find(content) {
        Some(m) if m.start() > 0 => {
            debug!("Content '{}' ends with suffix '{}'", content, m.as_str());
            (
                m.as_str().to_string(),
                Some(content[..m.start()].to_string()),
            )
        }
        _ => (content.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(entries: &[&str]) -> Vec<String> {
        let mut c: Vec<String> = entries.iter().map(|s| s.to_string()).collect();
        c.sort_by_key(|b| Reverse(b.len()));
        c
    }

    #[test]
    fn test_known_suffix_longest_match_wins() {
        let cat = catalog(&["_x", "_base_x"]);
        let (campaign, removed) = strip_known_suffixes("camp_base_x", &cat);
        assert_eq!(campaign, "camp");
        assert_eq!(removed.as_deref(), Some("_base_x"));
    }

    #[test]
    fn test_known_suffix_no_match() {
        let cat = catalog(&["_base_a"]);
        let (campaign, removed) = strip_known_suffixes("promo_base_b", &cat);
        assert_eq!(campaign, "promo_base_b");
        assert_eq!(removed, None);
    }

    #[test]
    fn test_known_suffix_only_strips_at_end() {
        let cat = catalog(&["_base_a"]);
        let (campaign, removed) = strip_known_suffixes("x_base_a_promo", &cat);
        assert_eq!(campaign, "x_base_a_promo");
        assert_eq!(removed, None);
    }

    #[test]
    fn test_known_suffix_stacked_bases() {
        let cat = catalog(&["_base_a", "_base_b"]);
        let (campaign, removed) = strip_known_suffixes("promo_base_a_base_b", &cat);
        assert_eq!(campaign, "promo");
        assert_eq!(removed.as_deref(), Some("_base_a_base_b"));

        let (again, removed_again) = strip_known_suffixes(&campaign, &cat);
        assert_eq!(again, "promo");
        assert_eq!(removed_again, None);
    }

    #[test]
    fn test_known_suffix_ignores_empty_entries() {
        let cat = vec!["".to_string()];
        let (campaign, removed) = strip_known_suffixes("promo", &cat);
        assert_eq!(campaign, "promo");
        assert_eq!(removed, None);
    }

    #[test]
    fn test_base_marker_case_insensitive() {
        let (campaign, removed) = strip_base_marker("promo_BASE_whatever");
        assert_eq!(campaign, "promo");
        assert_eq!(removed.as_deref(), Some("_BASE_whatever"));

        let (campaign, removed) = strip_base_marker("promo");
        assert_eq!(campaign, "promo");
        assert_eq!(removed, None);
    }

    #[test]
    fn test_base_marker_strips_from_first_marker() {
        let (campaign, removed) = strip_base_marker("a_base_x_base_y");
        assert_eq!(campaign, "a");
        assert_eq!(removed.as_deref(), Some("_base_x_base_y"));
    }

    #[test]
    fn test_format_prefix_strip() {
        let (content, removed) = strip_format_prefix("botao_7-30092025");
        assert_eq!(content, "-30092025");
        assert_eq!(removed.as_deref(), Some("botao_7"));

        let (again, removed_again) = strip_format_prefix(&content);
        assert_eq!(again, "-30092025");
        assert_eq!(removed_again, None);
    }

    #[test]
    fn test_format_prefix_variants() {
        assert_eq!(strip_format_prefix("IMG-12x").0, "x");
        assert_eq!(strip_format_prefix("hiperlink3").0, "");
        assert_eq!(strip_format_prefix("Botao_40-abc").0, "-abc");
        // digits are mandatory
        assert_eq!(strip_format_prefix("botao_-1").0, "botao_-1");
        // only at the start
        assert_eq!(strip_format_prefix("x-botao_1").0, "x-botao_1");
    }

    #[test]
    fn test_format_prefix_stacked() {
        let (content, removed) = strip_format_prefix("botao_1img_2-x");
        assert_eq!(content, "-x");
        assert_eq!(removed.as_deref(), Some("botao_1img_2"));
    }

    #[test]
    fn test_numeric_suffix_extract() {
        let (content, removed) = extract_numeric_suffix("botao_7-30092025");
        assert_eq!(content, "-30092025");
        assert_eq!(removed.as_deref(), Some("botao_7"));

        let (content, removed) = extract_numeric_suffix("-30092025");
        assert_eq!(content, "-30092025");
        assert_eq!(removed, None);
    }

    #[test]
    fn test_numeric_suffix_without_hyphen_or_match() {
        let (content, removed) = extract_numeric_suffix("promo12");
        assert_eq!(content, "12");
        assert_eq!(removed.as_deref(), Some("promo"));

        let (content, removed) = extract_numeric_suffix("promo");
        assert_eq!(content, "promo");
        assert_eq!(removed, None);

        let (content, removed) = extract_numeric_suffix("1234");
        assert_eq!(content, "1234");
        assert_eq!(removed, None);
    }

    #[test]
    fn test_all_policies_idempotent() {
        let cat: Vec<String> = ["_base_a", "_base_ab", "_a"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let inputs = [
            ("promo_base_ab", "botao_1-2024"),
            ("promo_base_a_base_ab", "img_3img4-5"),
            ("promo_BASE", "hiperlink_9"),
            ("plain", "plain"),
            ("_base_a", "-7"),
            ("x_a", "a-1-2"),
        ];

        for campaign_policy in [CampaignPolicy::KnownSuffixes, CampaignPolicy::MarkerPattern] {
            for content_policy in [ContentPolicy::PrefixStrip, ContentPolicy::SuffixExtract] {
                let normalizer = TagNormalizer::new(&cat, campaign_policy, content_policy);
                for (campaign, content) in inputs {
                    let (once, _) = normalizer.clean(campaign, content);
                    let (twice, report) = normalizer.clean(&once.campaign, &once.content);
                    assert_eq!(
                        once, twice,
                        "{:?}/{:?} on {}",
                        campaign_policy, content_policy, campaign
                    );
                    assert!(report.is_clean());
                }
            }
        }
    }

    #[test]
    fn test_normalizer_sorts_catalog() {
        let cat = vec!["_x".to_string(), "_base_x".to_string()];
        let normalizer =
            TagNormalizer::new(&cat, CampaignPolicy::KnownSuffixes, ContentPolicy::PrefixStrip);
        let (tags, report) = normalizer.clean("camp_base_x", "botao_7-30092025");
        assert_eq!(tags.campaign, "camp");
        assert_eq!(tags.content, "-30092025");
        assert_eq!(report.removed_base.as_deref(), Some("_base_x"));
        assert_eq!(report.removed_format.as_deref(), Some("botao_7"));
    }
}
