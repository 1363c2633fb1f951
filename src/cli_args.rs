use clap::Parser;
use log::{info, warn};

use crate::common::types::{DistributionMode, LinkConfig};
use crate::normalizer::{CampaignPolicy, ContentPolicy, TagNormalizer};
use crate::settings::Settings;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineArgs {
    #[arg(
        long,
        help = "Master link, e.g. https://site/?utm_campaign=...&utm_content=botao_1-3009"
    )]
    pub url: String,

    #[arg(long, help = "Path to a JSON settings file")]
    pub settings: Option<String>,

    #[arg(
        long,
        value_delimiter = ',',
        help = "Comma-separated list of bases to use (default: the whole catalog)"
    )]
    pub bases: Vec<String>,

    #[arg(
        long = "extra-base",
        help = "Extra base appended after the selected ones, e.g. _base_nova"
    )]
    pub extra_base: Option<String>,

    #[arg(long = "base-link", help = "Generate one clean link per base")]
    pub base_link: bool,

    #[arg(long = "no-base-link", conflicts_with = "base_link")]
    pub no_base_link: bool,

    #[arg(long, help = "Generate botao_N links")]
    pub buttons: bool,

    #[arg(long = "no-buttons", conflicts_with = "buttons")]
    pub no_buttons: bool,

    #[arg(long, help = "Generate img_N links")]
    pub images: bool,

    #[arg(long = "no-images", conflicts_with = "images")]
    pub no_images: bool,

    #[arg(long, help = "Generate hiperlink_N links")]
    pub hyperlinks: bool,

    #[arg(long = "no-hyperlinks", conflicts_with = "hyperlinks")]
    pub no_hyperlinks: bool,

    #[arg(
        long,
        help = "Number of numbered links per type (per base in multiplicative mode)"
    )]
    pub quantity: Option<u32>,

    #[arg(long, value_enum)]
    pub mode: Option<DistributionMode>,

    #[arg(long = "campaign-policy", value_enum)]
    pub campaign_policy: Option<CampaignPolicy>,

    #[arg(long = "content-policy", value_enum)]
    pub content_policy: Option<ContentPolicy>,

    #[arg(long = "output-dir", help = "Directory for the CSV export")]
    pub output_dir: Option<String>,

    #[arg(long = "no-export", help = "Only print the table, do not write the CSV")]
    pub no_export: bool,
}

fn flag(on: bool, off: bool, fallback: bool) -> bool {
    if off {
        false
    } else if on {
        true
    } else {
        fallback
    }
}

impl CommandLineArgs {
    pub fn parse_args() -> Self {
        let args = CommandLineArgs::parse();

        info!("Parsed {} base(s) from --bases", args.bases.len());
        if let Some(extra) = &args.extra_base {
            info!("Extra base: {}", extra);
        }

        args
    }

    /// Selected bases (or the whole catalog), then the extra base.
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn selected_bases(&self, settings: &Settings) -> Vec<String> {
        let mut candidates: Vec<String> = if self.bases.is_empty() {
            settings.bases.clone()
        } else {
            for base in &self.bases {
                if !settings.bases.contains(base) {
                    warn!("Base '{}' is not in the catalog", base);
                }
            }
            self.bases.clone()
        };

        if let Some(extra) = &self.extra_base {
            candidates.push(extra.clone());
        }

        let mut selected: Vec<String> = Vec::with_capacity(candidates.len());
        for base in candidates {
            let base = base.trim();
            if !base.is_empty() && !selected.iter().any(|b| b == base) {
                selected.push(base.to_string());
            }
        }
        selected
    }

    /// Flags win over settings.
    pub fn link_config(&self, settings: &Settings) -> LinkConfig {
        LinkConfig {
            bases: self.selected_bases(settings),
            generate_base_link: flag(
                self.base_link,
                self.no_base_link,
                settings.generate_base_link,
            ),
            generate_buttons: flag(self.buttons, self.no_buttons, settings.generate_buttons),
            generate_images: flag(self.images, self.no_images, settings.generate_images),
            generate_hyperlinks: flag(
                self.hyperlinks,
                self.no_hyperlinks,
                settings.generate_hyperlinks,
            ),
            quantity: self.quantity.unwrap_or(settings.quantity),
            mode: self.mode.unwrap_or(settings.distribution_mode),
        }
    }

    pub fn normalizer(&self, settings: &Settings) -> TagNormalizer {
        TagNormalizer::new(
            &settings.bases,
            self.campaign_policy.unwrap_or(settings.campaign_policy),
            self.content_policy.unwrap_or(settings.content_policy),
        )
    }

    pub fn output_dir<'a>(&'a self, settings: &'a Settings) -> &'a str {
        self.output_dir.as_deref().unwrap_or(&settings.output_dir)
    }
}
