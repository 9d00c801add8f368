//! Evaluation of context strategies against one focus annotation.

use ahash::AHashMap;
use log::trace;

use crate::bounds::Bounds;
use crate::context::{Context, Window};
use crate::document::annotation::Annotation;
use crate::document::document::Document;
use crate::document::span_index::SpanIndex;
use crate::error::Result;
use crate::extractor::BaseExtractor;
use crate::feature::{Feature, FeatureValue};

/// Everything a context needs to evaluate one focus.
pub(crate) struct Scope<'a> {
    pub document: &'a Document,
    pub focus: &'a Annotation,
    pub bounds: Bounds,
    pub kind: &'a str,
    pub extractor: &'a BaseExtractor,
    pub feature_name: Option<&'a str>,
}

/// A base feature tagged with the context that produced it.
///
/// The composite name is only materialised at the end, so that wrappers can
/// strip or replace the context and position parts.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ContextFeature {
    pub context: String,
    pub position: Option<usize>,
    pub feature: Feature,
    pub out_of_bounds: bool,
}

impl ContextFeature {
    fn new(context: String, position: Option<usize>, feature: Feature) -> Self {
        ContextFeature {
            context,
            position,
            feature,
            out_of_bounds: false,
        }
    }

    pub fn into_feature(self) -> Feature {
        let position = self.position.map(|p| p.to_string());
        let name = Feature::create_name([
            Some(self.context.as_str()),
            position.as_deref(),
            self.feature.name.as_deref(),
        ]);
        Feature {
            name: Some(name),
            value: self.feature.value,
        }
    }
}

/// Which end of the candidate list position 0 refers to, and the order the
/// positions are emitted in.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Emit {
    /// Emit from the farthest position down to the nearest
    Outermost,
    /// Emit from the nearest position up to the farthest
    Innermost,
}

impl Context {
    pub(crate) fn evaluate(&self, scope: &Scope<'_>) -> Result<Vec<ContextFeature>> {
        trace!("evaluating {} at {}", self, scope.focus.span());

        match self {
            Context::Focus => {
                let name = self.name();
                Ok(scope
                    .extractor
                    .extract(scope.document, scope.focus)?
                    .into_iter()
                    .map(|feature| ContextFeature::new(name.clone(), None, feature))
                    .collect())
            }
            Context::Preceding(window) => {
                let mut candidates =
                    scope
                        .document
                        .select_preceding(scope.kind, scope.focus, window.end())?;
                candidates.reverse();
                self.windowed(scope, *window, &candidates, Emit::Outermost)
            }
            Context::Following(window) => {
                let candidates =
                    scope
                        .document
                        .select_following(scope.kind, scope.focus, window.end())?;
                self.windowed(scope, *window, &candidates, Emit::Innermost)
            }
            Context::FirstCovered(window) => {
                let candidates = scope.document.select_covered(scope.kind, scope.focus)?;
                self.windowed(scope, *window, &candidates, Emit::Innermost)
            }
            Context::LastCovered(window) => {
                let mut candidates = scope.document.select_covered(scope.kind, scope.focus)?;
                candidates.reverse();
                self.windowed(scope, *window, &candidates, Emit::Outermost)
            }
            Context::Covered => self.eval_covered(scope),
            Context::Bag(children) => self.eval_bag(scope, children),
            Context::Count(children) => self.eval_count(scope, children),
            Context::Ngram(children) => self.eval_ngram(scope, children),
            Context::Ngrams { n, children } => self.eval_ngrams(scope, n.get(), children),
        }
    }

    /// Shared algorithm of the windowed strategies.
    ///
    /// `candidates` is ordered nearest-first. Positions are scanned from 0
    /// outward; every position without a visible candidate bumps the
    /// out-of-bounds ordinal, whether the candidate is missing or rejected by
    /// the bounds, and whether or not the position lies inside the window.
    fn windowed(
        &self,
        scope: &Scope<'_>,
        window: Window,
        candidates: &[&Annotation],
        emit: Emit,
    ) -> Result<Vec<ContextFeature>> {
        let name = self.name();
        let mut positions: Vec<Vec<ContextFeature>> = Vec::with_capacity(candidates.len());
        let mut oob = 0;

        for position in 0..window.end() {
            let visible = candidates
                .get(position)
                .filter(|candidate| scope.bounds.contains(candidate.span()));

            match visible {
                Some(candidate) => {
                    if position >= window.begin() {
                        let features = scope.extractor.extract(scope.document, candidate)?;
                        positions.push(
                            features
                                .into_iter()
                                .map(|feature| {
                                    ContextFeature::new(name.clone(), Some(position), feature)
                                })
                                .collect(),
                        );
                    }
                }
                None => {
                    oob += 1;
                    if position >= window.begin() {
                        let placeholder = Feature {
                            name: scope.feature_name.map(str::to_string),
                            value: FeatureValue::Text(format!("OOB{oob}")),
                        };
                        positions.push(vec![ContextFeature {
                            context: name.clone(),
                            position: Some(position),
                            feature: placeholder,
                            out_of_bounds: true,
                        }]);
                    }
                }
            }
        }

        if emit == Emit::Outermost {
            positions.reverse();
        }
        Ok(positions.into_iter().flatten().collect())
    }

    fn eval_covered(&self, scope: &Scope<'_>) -> Result<Vec<ContextFeature>> {
        let name = self.name();
        let mut features = Vec::new();
        for (position, candidate) in scope
            .document
            .select_covered(scope.kind, scope.focus)?
            .into_iter()
            .enumerate()
        {
            if !scope.bounds.contains(candidate.span()) {
                continue;
            }
            for feature in scope.extractor.extract(scope.document, candidate)? {
                features.push(ContextFeature::new(name.clone(), Some(position), feature));
            }
        }
        Ok(features)
    }

    fn children_features(
        scope: &Scope<'_>,
        children: &[Context],
    ) -> Result<Vec<ContextFeature>> {
        let mut features = Vec::new();
        for child in children {
            features.extend(child.evaluate(scope)?);
        }
        Ok(features)
    }

    fn eval_bag(&self, scope: &Scope<'_>, children: &[Context]) -> Result<Vec<ContextFeature>> {
        let name = self.name();
        Ok(Self::children_features(scope, children)?
            .into_iter()
            .map(|child| ContextFeature {
                context: name.clone(),
                position: None,
                feature: child.feature,
                out_of_bounds: child.out_of_bounds,
            })
            .collect())
    }

    /// Counts real (non-placeholder) values, grouped by base feature name and
    /// value. A nested `Count` child contributes names that already embed what
    /// it counted, so the outer level counts "value seen k times".
    ///
    /// Groups are keyed on the pair itself; the joined display name is only
    /// built on output, so `(None, "pos_NN")` and `(Some("pos"), "NN")` stay
    /// distinct.
    fn eval_count(&self, scope: &Scope<'_>, children: &[Context]) -> Result<Vec<ContextFeature>> {
        let name = self.name();
        let mut groups: Vec<(Feature, i64)> = Vec::new();
        let mut index: AHashMap<(Option<String>, FeatureValue), usize> = AHashMap::new();

        for child in Self::children_features(scope, children)? {
            if child.out_of_bounds {
                continue;
            }
            let key = (child.feature.name.clone(), child.feature.value.clone());
            match index.get(&key) {
                Some(&slot) => groups[slot].1 += 1,
                None => {
                    index.insert(key, groups.len());
                    groups.push((child.feature, 1));
                }
            }
        }

        Ok(groups
            .into_iter()
            .map(|(feature, count)| {
                let value = feature.value.to_string();
                let key = Feature::create_name([feature.name.as_deref(), Some(value.as_str())]);
                ContextFeature::new(name.clone(), None, Feature::new(key, count))
            })
            .collect())
    }

    fn eval_ngram(&self, scope: &Scope<'_>, children: &[Context]) -> Result<Vec<ContextFeature>> {
        let values: Vec<String> = Self::children_features(scope, children)?
            .into_iter()
            .map(|child| child.feature.value.to_string())
            .collect();
        if values.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![self.joined(scope, &values)])
    }

    fn eval_ngrams(
        &self,
        scope: &Scope<'_>,
        n: usize,
        children: &[Context],
    ) -> Result<Vec<ContextFeature>> {
        let values: Vec<String> = Self::children_features(scope, children)?
            .into_iter()
            .map(|child| child.feature.value.to_string())
            .collect();
        Ok(values
            .windows(n)
            .map(|window| self.joined(scope, window))
            .collect())
    }

    fn joined(&self, scope: &Scope<'_>, values: &[String]) -> ContextFeature {
        let feature = Feature {
            name: scope.feature_name.map(str::to_string),
            value: FeatureValue::Text(values.join("_")),
        };
        ContextFeature::new(self.name(), None, feature)
    }
}
