/// Everything that can stop a run before a single link is generated.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Missing 'utm_campaign' parameter")]
    MissingCampaignTag,

    #[error("Missing 'utm_content' parameter")]
    MissingContentTag,

    #[error(
        "'utm_content' contains invalid characters (allowed: a-z, A-Z, 0-9, '-', '_', '='): {0}"
    )]
    InvalidContentCharacters(String),

    #[error("At least one base must be selected")]
    NoBaseSelected,

    #[error("Quantity {quantity} is out of range (1-{max})")]
    InvalidQuantity { quantity: u32, max: u32 },
}

pub type LinkResult<T> = Result<T, LinkError>;
