use fbtool_lib::PlanVariant;
use serde::{Deserialize, Serialize};

/// Default configuration values for the application.
pub struct Defaults;

impl Defaults {
    pub const IMAGES: &'static str = "images";
    pub const VARIANT: &'static str = "full_wipe";
    pub const PRODUCT: &'static str = fbtool_lib::duchamp::PRODUCT;
}

/// Root structure of the JSON configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FbToolConfig {
    /// Path to the flashing tool binary; auto-detected when absent.
    pub tool: Option<String>,
    #[serde(default = "default_images")]
    pub images: String,
    #[serde(default = "default_variant")]
    pub variant: String,
    #[serde(default = "default_product")]
    pub product: String,
    #[serde(default)]
    pub assume_yes: bool,
}

fn default_images() -> String {
    Defaults::IMAGES.to_string()
}
fn default_variant() -> String {
    Defaults::VARIANT.to_string()
}
fn default_product() -> String {
    Defaults::PRODUCT.to_string()
}

impl FbToolConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: FbToolConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// A configuration carrying every default value.
    pub fn with_defaults() -> Self {
        Self {
            tool: None,
            images: Defaults::IMAGES.to_string(),
            variant: Defaults::VARIANT.to_string(),
            product: Defaults::PRODUCT.to_string(),
            assume_yes: false,
        }
    }

    /// Convert the variant string to the `PlanVariant` enum
    pub fn parse_variant(&self) -> Result<PlanVariant, String> {
        self.variant
            .parse::<PlanVariant>()
            .map_err(|_| format!("Invalid plan variant: {}", self.variant))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.parse_variant()?;

        if self.product.is_empty() {
            return Err("Product identifier must not be empty".to_string());
        }

        Ok(())
    }
}
