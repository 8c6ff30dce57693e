//! Product description submitted by the user.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::deck::ThemePalette;

/// Minimum number of non-blank key features.
pub const MIN_KEY_FEATURES: usize = 3;

pub(crate) const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
pub(crate) const TOO_FEW_FEATURES: &str = "At least 3 key features are required";

/// Brand colours as typed by the user (any hex spelling).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            primary: "#3B82F6".to_string(),
            secondary: "#8B5CF6".to_string(),
            accent: "#F59E0B".to_string(),
        }
    }
}

/// Visual style requested for the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylePreference {
    #[default]
    Modern,
    Minimal,
    Bold,
    Elegant,
}

impl StylePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            StylePreference::Modern => "modern",
            StylePreference::Minimal => "minimal",
            StylePreference::Bold => "bold",
            StylePreference::Elegant => "elegant",
        }
    }
}

impl fmt::Display for StylePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Funding stage the pitch deck is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FundingStage {
    PreSeed,
    #[default]
    Seed,
    SeriesA,
    SeriesB,
    Bootstrapped,
}

impl FundingStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            FundingStage::PreSeed => "pre-seed",
            FundingStage::Seed => "seed",
            FundingStage::SeriesA => "series-a",
            FundingStage::SeriesB => "series-b",
            FundingStage::Bootstrapped => "bootstrapped",
        }
    }
}

impl fmt::Display for FundingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured description of the product to generate collateral for.
///
/// Required text fields default to empty when absent from the JSON body so
/// that [`AppInput::validate`] can report them field by field instead of the
/// request failing at deserialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInput {
    #[serde(default)]
    pub app_name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub problem_solved: String,
    #[serde(default)]
    pub key_features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_colors: Option<BrandColors>,
    #[serde(default)]
    pub style_preference: StylePreference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_stage: Option<FundingStage>,
}

impl AppInput {
    /// Check the input before any content is requested.
    ///
    /// Every problem is reported, not only the first one.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        let required = [
            ("appName", &self.app_name),
            ("tagline", &self.tagline),
            ("targetAudience", &self.target_audience),
            ("problemSolved", &self.problem_solved),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(FieldError::new(field, format!("{} is required", field)));
            }
        }

        let features = self.features().count();
        if features < MIN_KEY_FEATURES {
            errors.push(FieldError::new(
                "keyFeatures",
                format!(
                    "At least {} key features are required, got {}",
                    MIN_KEY_FEATURES, features
                ),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { errors })
        }
    }

    /// Non-blank key features, trimmed.
    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.key_features
            .iter()
            .map(|feature| feature.trim())
            .filter(|feature| !feature.is_empty())
    }

    /// Brand colours, or the defaults when none were given.
    pub fn brand_colors(&self) -> BrandColors {
        self.brand_colors.clone().unwrap_or_default()
    }

    /// Funding stage, defaulting to seed.
    pub fn funding_stage(&self) -> FundingStage {
        self.funding_stage.unwrap_or_default()
    }

    /// Competitors, when given and not blank.
    pub fn competitors(&self) -> Option<&str> {
        self.competitors
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Palette for rendering the pitch deck.
    pub fn palette(&self) -> ThemePalette {
        match &self.brand_colors {
            Some(colors) => {
                ThemePalette::from_brand(&colors.primary, &colors.secondary, &colors.accent)
            }
            None => ThemePalette::default(),
        }
    }
}

/// One rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// All problems found by [`AppInput::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Short headline for the whole set.
    ///
    /// Missing required fields take precedence over the feature count.
    pub fn summary(&self) -> &'static str {
        if self.errors.iter().any(|e| e.field != "keyFeatures") {
            MISSING_REQUIRED_FIELDS
        } else {
            TOO_FEW_FEATURES
        }
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())?;
        for error in &self.errors {
            write!(f, "; {}", error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
