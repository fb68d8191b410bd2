use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::signature::Signature;

/// Anagram classes of the admitted candidate words, keyed by signature.
///
/// Only words whose letters are all distinct are admitted; a word with a
/// repeated letter wastes a position and can never be part of a maximal
/// disjoint cover.
pub struct WordIndex {
    groups: FxHashMap<Signature, Vec<String>>,
}

impl WordIndex {
    /// Index `words`, keeping those with exactly `word_len` distinct letters.
    ///
    /// The caller supplies words already filtered to the target length and to
    /// the lowercase alphabet; anything else trips the codec's letter guard.
    pub fn build<I, S>(words: I, word_len: usize) -> WordIndex
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut groups: FxHashMap<Signature, Vec<String>> = FxHashMap::default();
        for word in words {
            let word = word.as_ref();
            let signature = Signature::of_word(word);
            // A repeated letter shows up as a short popcount.
            if signature.count() as usize != word_len {
                continue;
            }
            groups.entry(signature).or_default().push(word.to_owned());
        }
        WordIndex { groups }
    }

    /// The candidate signature set, sorted for deterministic iteration.
    pub fn candidates(&self) -> Vec<Signature> {
        self.groups.keys().copied().sorted().collect_vec()
    }

    /// The words sharing `signature`, in input order. Empty only for
    /// signatures no admitted word produced.
    pub fn anagrams(&self, signature: Signature) -> &[String] {
        self.groups.get(&signature).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct candidate signatures.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
