use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::constants::{MAX_QUANTITY_CYCLIC, MAX_QUANTITY_MULTIPLICATIVE};

/// Kind of link a record represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Base,
    Button,
    Image,
    Hyperlink,
}

impl FormatKind {
    /// Numbered kinds, in the order they are generated
    pub const NUMBERED: [FormatKind; 3] =
        [FormatKind::Button, FormatKind::Image, FormatKind::Hyperlink];

    /// Prefix used in identifiers and in `utm_content` (`botao_3`)
    pub fn marker(&self) -> &'static str {
        match self {
            FormatKind::Base => "base",
            FormatKind::Button => "botao",
            FormatKind::Image => "img",
            FormatKind::Hyperlink => "hiperlink",
        }
    }

    /// Value of the `Tipo` column
    pub fn type_label(&self) -> &'static str {
        match self {
            FormatKind::Base => "Link Base",
            FormatKind::Button => "Botao",
            FormatKind::Image => "Img",
            FormatKind::Hyperlink => "Hiperlink",
        }
    }

    /// Value of the `Grupo` column
    pub fn group_label(&self) -> &'static str {
        match self {
            FormatKind::Base => "Links Base",
            FormatKind::Button => "Botaos",
            FormatKind::Image => "Imgs",
            FormatKind::Hyperlink => "Hiperlinks",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DistributionMode {
    /// The quantity is shared and rotates round-robin over the bases
    #[default]
    Cyclic,
    /// The quantity is generated for every base
    Multiplicative,
}

impl DistributionMode {
    pub fn max_quantity(&self) -> u32 {
        match self {
            DistributionMode::Cyclic => MAX_QUANTITY_CYCLIC,
            DistributionMode::Multiplicative => MAX_QUANTITY_MULTIPLICATIVE,
        }
    }
}

/// What to generate and for which bases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    pub bases: Vec<String>,
    pub generate_base_link: bool,
    pub generate_buttons: bool,
    pub generate_images: bool,
    pub generate_hyperlinks: bool,
    pub quantity: u32,
    pub mode: DistributionMode,
}

impl LinkConfig {
    /// Enabled numbered kinds, always in Button, Image, Hyperlink order
    pub fn numbered_kinds(&self) -> Vec<FormatKind> {
        FormatKind::NUMBERED
            .into_iter()
            .filter(|kind| match kind {
                FormatKind::Button => self.generate_buttons,
                FormatKind::Image => self.generate_images,
                FormatKind::Hyperlink => self.generate_hyperlinks,
                FormatKind::Base => false,
            })
            .collect()
    }

    pub fn nothing_requested(&self) -> bool {
        !self.generate_base_link && self.numbered_kinds().is_empty()
    }
}

/// Canonical campaign and content values every record is derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedTags {
    pub campaign: String,
    pub content: String,
}

/// What the normalizer stripped; feedback only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleaningReport {
    pub removed_base: Option<String>,
    pub removed_format: Option<String>,
}

impl CleaningReport {
    pub fn is_clean(&self) -> bool {
        self.removed_base.is_none() && self.removed_format.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub kind: FormatKind,
    pub identifier: String,
    pub base: String,
    pub url: String,
}

/// Result of a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Generated(Vec<LinkRecord>),
    NothingRequested,
}

impl Outcome {
    pub fn records(&self) -> &[LinkRecord] {
        match self {
            Outcome::Generated(records) => records,
            Outcome::NothingRequested => &[],
        }
    }
}
