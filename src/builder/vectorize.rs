use std::collections::HashMap;

use anyhow::{bail, Result};

use super::stopwords::StopWords;

/// Default cap on the learned vocabulary size
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Bag-of-words vectorizer over movie tag strings
///
/// Tokens are lowercase runs of alphanumeric characters (underscores count)
/// at least two characters long; English stop words are dropped. The
/// vocabulary keeps the `max_features` most frequent terms across the whole
/// corpus, breaking frequency ties alphabetically.
pub struct Vectorizer {
    max_features: usize,
    stop_words: StopWords,
    vocabulary: HashMap<String, usize>,
}

impl Vectorizer {
    /// Creates a vectorizer with the given vocabulary cap
    pub fn new(max_features: usize) -> Self {
        Self {
            max_features,
            stop_words: StopWords::english(),
            vocabulary: HashMap::new(),
        }
    }

    /// Learns the vocabulary from the corpus
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if documents.is_empty() {
            bail!("cannot fit a vocabulary on an empty corpus");
        }

        let mut term_freq: HashMap<String, u64> = HashMap::new();
        for doc in documents {
            for token in tokenize(doc.as_ref()) {
                if self.stop_words.contains(&token) {
                    continue;
                }
                *term_freq.entry(token).or_insert(0) += 1;
            }
        }

        if term_freq.is_empty() {
            bail!("corpus produced no usable terms");
        }

        let mut ranked: Vec<(String, u64)> = term_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.max_features);

        self.vocabulary = ranked
            .into_iter()
            .enumerate()
            .map(|(idx, (term, _))| (term, idx))
            .collect();

        Ok(())
    }

    /// Transforms documents into count vectors over the learned vocabulary
    ///
    /// Stop words never appear in the vocabulary, so counting only terms the
    /// vocabulary knows filters them implicitly.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<Vec<u32>>> {
        if self.vocabulary.is_empty() {
            bail!("vocabulary is empty, call fit first");
        }

        let width = self.vocabulary.len();
        let mut vectors = Vec::with_capacity(documents.len());
        for doc in documents {
            let mut counts = vec![0u32; width];
            for token in tokenize(doc.as_ref()) {
                if let Some(&idx) = self.vocabulary.get(&token) {
                    counts[idx] += 1;
                }
            }
            vectors.push(counts);
        }
        Ok(vectors)
    }

    /// Learns the vocabulary and transforms the corpus in one pass
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Vec<Vec<u32>>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Size of the learned vocabulary
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Splits text into lowercase alphanumeric tokens of length two or more
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|t| t.chars().count() >= 2)
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_drops_short_tokens() {
        assert_eq!(
            tokenize("The X-Men: First Class"),
            vec!["the", "men", "first", "class"]
        );
    }

    #[test]
    fn test_tokenize_keeps_numbers_and_underscores() {
        assert_eq!(tokenize("Blade_Runner 2049!"), vec!["blade_runner", "2049"]);
    }

    #[test]
    fn test_tokenize_absorbs_punctuation() {
        assert_eq!(
            tokenize(r#"[{"name": "Action"}, {"name": "Drama"}]"#),
            vec!["name", "action", "name", "drama"]
        );
    }

    #[test]
    fn test_fit_excludes_stop_words() {
        let mut vectorizer = Vectorizer::new(100);
        vectorizer
            .fit(&["the alien and the ocean"])
            .expect("fit should succeed");
        assert_eq!(vectorizer.vocabulary_size(), 2);
    }

    #[test]
    fn test_vocabulary_cap_breaks_ties_alphabetically() {
        // banana appears twice, apple and cherry once each; the cap keeps
        // banana plus the alphabetically first of the tied pair.
        let mut vectorizer = Vectorizer::new(2);
        let vectors = vectorizer
            .fit_transform(&["banana apple", "banana cherry"])
            .expect("fit_transform should succeed");
        assert_eq!(vectorizer.vocabulary_size(), 2);
        // Vocabulary order: banana (freq 2) then apple (tie, alphabetical).
        assert_eq!(vectors, vec![vec![1, 1], vec![1, 0]]);
    }

    #[test]
    fn test_transform_counts_term_occurrences() {
        let mut vectorizer = Vectorizer::new(10);
        let vectors = vectorizer
            .fit_transform(&["apple banana apple", "banana cherry"])
            .expect("fit_transform should succeed");
        // Ranked vocabulary: apple(2), banana(2) tie broken alphabetically,
        // then cherry(1).
        assert_eq!(vectors, vec![vec![2, 1, 0], vec![0, 1, 1]]);
    }

    #[test]
    fn test_transform_width_matches_vocabulary() {
        let mut vectorizer = Vectorizer::new(3);
        vectorizer
            .fit(&["one_a two_b three_c four_d"])
            .expect("fit should succeed");
        let vectors = vectorizer
            .transform(&["three_c unseen"])
            .expect("transform should succeed");
        assert_eq!(vectors[0].len(), 3);
        assert_eq!(vectors[0].iter().sum::<u32>(), 1);
    }

    #[test]
    fn test_fit_empty_corpus_fails() {
        let mut vectorizer = Vectorizer::new(10);
        let docs: Vec<&str> = Vec::new();
        assert!(vectorizer.fit(&docs).is_err());
    }

    #[test]
    fn test_fit_all_stop_words_fails() {
        let mut vectorizer = Vectorizer::new(10);
        assert!(vectorizer.fit(&["the and or but"]).is_err());
    }

    #[test]
    fn test_transform_before_fit_fails() {
        let vectorizer = Vectorizer::new(10);
        assert!(vectorizer.transform(&["anything"]).is_err());
    }
}
