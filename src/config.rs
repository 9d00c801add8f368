//! Declarative extractor configuration.
//!
//! An [`ExtractorConfig`] describes a [`ContextualExtractor`] as data so that
//! it can live in a JSON file next to a trained model. Building it runs the
//! same validation as the programmatic constructors, so a bad window or an
//! empty wrapper is reported when the configuration is loaded, not during
//! extraction.
//!
//! # Examples
//!
//! ```
//! use spanfeat::config::ExtractorConfig;
//!
//! let config = ExtractorConfig::from_json_str(r#"{
//!     "annotation_type": "token",
//!     "extractor": { "type": "lowercase_text" },
//!     "contexts": [
//!         { "type": "preceding", "end": 2 },
//!         { "type": "bag", "contexts": [{ "type": "following", "begin": 1, "end": 3 }] }
//!     ]
//! }"#).unwrap();
//!
//! let extractor = config.build().unwrap();
//! assert_eq!(extractor.contexts()[1].name(), "Bag_Following_1_3");
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::TOKEN_TYPE;
use crate::context::Context;
use crate::contextual::ContextualExtractor;
use crate::error::Result;
use crate::extractor::BaseExtractor;
use crate::extractor::attribute::AttributeExtractor;
use crate::extractor::combined::CombinedExtractor;
use crate::extractor::text::{CoveredTextExtractor, LowercaseTextExtractor};

/// Configuration of a contextual extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// The annotation type the contexts search for.
    #[serde(default = "default_annotation_type")]
    pub annotation_type: String,

    /// The base extractor applied to every located annotation.
    #[serde(default)]
    pub extractor: BaseExtractorConfig,

    /// The context strategies, in output order.
    pub contexts: Vec<ContextConfig>,
}

fn default_annotation_type() -> String {
    TOKEN_TYPE.to_string()
}

impl ExtractorConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading extractor config from {}", path.display());
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Serialize the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the contextual extractor this configuration describes.
    pub fn build(&self) -> Result<ContextualExtractor> {
        let contexts = self
            .contexts
            .iter()
            .map(ContextConfig::build)
            .collect::<Result<Vec<_>>>()?;
        ContextualExtractor::new(self.annotation_type.clone(), self.extractor.build(), contexts)
    }
}

/// Configuration of a base extractor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BaseExtractorConfig {
    /// The covered text, unnamed
    #[default]
    CoveredText,
    /// The lowercased covered text, named `lower`
    LowercaseText,
    /// One annotation attribute, named after the attribute
    Attribute {
        name: String,
        #[serde(default)]
        strict: bool,
    },
    /// Several extractors concatenated
    Combined { extractors: Vec<BaseExtractorConfig> },
}

impl BaseExtractorConfig {
    pub fn build(&self) -> BaseExtractor {
        match self {
            BaseExtractorConfig::CoveredText => BaseExtractor::unnamed(CoveredTextExtractor::new()),
            BaseExtractorConfig::LowercaseText => {
                BaseExtractor::named(LowercaseTextExtractor::new())
            }
            BaseExtractorConfig::Attribute { name, strict } => {
                BaseExtractor::named(AttributeExtractor::new(name.clone()).strict(*strict))
            }
            BaseExtractorConfig::Combined { extractors } => BaseExtractor::unnamed(
                CombinedExtractor::new(extractors.iter().map(BaseExtractorConfig::build).collect()),
            ),
        }
    }
}

/// Configuration of a context strategy.
///
/// Windowed variants default `begin` to 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContextConfig {
    Focus,
    Preceding {
        #[serde(default)]
        begin: usize,
        end: usize,
    },
    Following {
        #[serde(default)]
        begin: usize,
        end: usize,
    },
    Covered,
    FirstCovered {
        #[serde(default)]
        begin: usize,
        end: usize,
    },
    LastCovered {
        #[serde(default)]
        begin: usize,
        end: usize,
    },
    Bag {
        contexts: Vec<ContextConfig>,
    },
    Count {
        contexts: Vec<ContextConfig>,
    },
    Ngram {
        contexts: Vec<ContextConfig>,
    },
    Ngrams {
        n: usize,
        contexts: Vec<ContextConfig>,
    },
}

impl ContextConfig {
    /// Build and validate the context.
    pub fn build(&self) -> Result<Context> {
        match self {
            ContextConfig::Focus => Ok(Context::focus()),
            ContextConfig::Covered => Ok(Context::covered()),
            ContextConfig::Preceding { begin, end } => Context::preceding_range(*begin, *end),
            ContextConfig::Following { begin, end } => Context::following_range(*begin, *end),
            ContextConfig::FirstCovered { begin, end } => {
                Context::first_covered_range(*begin, *end)
            }
            ContextConfig::LastCovered { begin, end } => Context::last_covered_range(*begin, *end),
            ContextConfig::Bag { contexts } => Context::bag(Self::build_all(contexts)?),
            ContextConfig::Count { contexts } => Context::count(Self::build_all(contexts)?),
            ContextConfig::Ngram { contexts } => Context::ngram(Self::build_all(contexts)?),
            ContextConfig::Ngrams { n, contexts } => {
                Context::ngrams(*n, Self::build_all(contexts)?)
            }
        }
    }

    fn build_all(contexts: &[ContextConfig]) -> Result<Vec<Context>> {
        contexts.iter().map(ContextConfig::build).collect()
    }
}

impl From<&Context> for ContextConfig {
    fn from(context: &Context) -> Self {
        fn children(contexts: &[Context]) -> Vec<ContextConfig> {
            contexts.iter().map(ContextConfig::from).collect()
        }

        match context {
            Context::Focus => ContextConfig::Focus,
            Context::Covered => ContextConfig::Covered,
            Context::Preceding(w) => ContextConfig::Preceding {
                begin: w.begin(),
                end: w.end(),
            },
            Context::Following(w) => ContextConfig::Following {
                begin: w.begin(),
                end: w.end(),
            },
            Context::FirstCovered(w) => ContextConfig::FirstCovered {
                begin: w.begin(),
                end: w.end(),
            },
            Context::LastCovered(w) => ContextConfig::LastCovered {
                begin: w.begin(),
                end: w.end(),
            },
            Context::Bag(contexts) => ContextConfig::Bag {
                contexts: children(contexts),
            },
            Context::Count(contexts) => ContextConfig::Count {
                contexts: children(contexts),
            },
            Context::Ngram(contexts) => ContextConfig::Ngram {
                contexts: children(contexts),
            },
            Context::Ngrams { n, children: inner } => ContextConfig::Ngrams {
                n: n.get(),
                contexts: children(inner),
            },
        }
    }
}
