use std::collections::HashSet;

/// Transformation that can be applied to query or field text
///
/// Each transformation is composable and testable in isolation.
pub trait TextTransformation: Send + Sync {
    fn transform(&self, text: &str) -> String;
    fn name(&self) -> &'static str;
}

/// Converts text to lowercase
#[derive(Debug, Clone)]
pub struct LowercaseTransform;

impl TextTransformation for LowercaseTransform {
    fn transform(&self, text: &str) -> String {
        text.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "Lowercase"
    }
}

/// Removes special characters, keeping only alphanumeric and whitespace
#[derive(Debug, Clone)]
pub struct RemoveSpecialCharsTransform;

impl TextTransformation for RemoveSpecialCharsTransform {
    fn transform(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                if c.is_alphanumeric() || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "RemoveSpecialChars"
    }
}

/// Normalizes whitespace (collapses multiple spaces, trims)
#[derive(Debug, Clone)]
pub struct NormalizeWhitespaceTransform;

impl TextTransformation for NormalizeWhitespaceTransform {
    fn transform(&self, text: &str) -> String {
        text.split_whitespace().collect::<Vec<&str>>().join(" ")
    }

    fn name(&self) -> &'static str {
        "NormalizeWhitespace"
    }
}

/// Removes stop words
#[derive(Debug, Clone)]
pub struct RemoveStopWordsTransform {
    stop_words: HashSet<String>,
}

impl RemoveStopWordsTransform {
    pub fn new(stop_words: Vec<String>) -> Self {
        Self {
            stop_words: stop_words.into_iter().collect(),
        }
    }
}

impl TextTransformation for RemoveStopWordsTransform {
    fn transform(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|word| !self.stop_words.contains(&word.to_lowercase()))
            .collect::<Vec<&str>>()
            .join(" ")
    }

    fn name(&self) -> &'static str {
        "RemoveStopWords"
    }
}

/// Normalizer that applies a pipeline of transformations to query and
/// candidate field text before similarity scoring.
pub struct QueryNormalizer {
    transformations: Vec<Box<dyn TextTransformation>>,
}

impl QueryNormalizer {
    pub fn new() -> Self {
        Self {
            transformations: Vec::new(),
        }
    }

    /// Create a normalizer with the default transformations
    pub fn default_pipeline(stop_words: Vec<String>) -> Self {
        Self::new()
            .with_lowercase()
            .with_remove_special_chars()
            .with_normalize_whitespace()
            .with_remove_stop_words(stop_words)
    }

    pub fn with_lowercase(mut self) -> Self {
        self.transformations.push(Box::new(LowercaseTransform));
        self
    }

    pub fn with_remove_special_chars(mut self) -> Self {
        self.transformations
            .push(Box::new(RemoveSpecialCharsTransform));
        self
    }

    pub fn with_normalize_whitespace(mut self) -> Self {
        self.transformations
            .push(Box::new(NormalizeWhitespaceTransform));
        self
    }

    pub fn with_remove_stop_words(mut self, stop_words: Vec<String>) -> Self {
        self.transformations
            .push(Box::new(RemoveStopWordsTransform::new(stop_words)));
        self
    }

    /// Apply all transformations in order
    pub fn normalize(&self, text: &str) -> String {
        let mut result = text.to_string();

        for transformation in &self.transformations {
            result = transformation.transform(&result);
            log::trace!("After {}: '{}'", transformation.name(), result);
        }

        result
    }

    pub fn transformation_count(&self) -> usize {
        self.transformations.len()
    }
}

impl Default for QueryNormalizer {
    fn default() -> Self {
        Self::default_pipeline(Vec::new())
    }
}
