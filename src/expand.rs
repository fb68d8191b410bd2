use itertools::Itertools;

use crate::index::WordIndex;
use crate::search::Cover;

/// Every literal-word combination behind `cover`: one entry per choice of
/// word from each member's anagram class. Lazy and restartable; the order is
/// stable for a given index.
pub fn combinations<'a>(
    cover: &'a Cover,
    index: &'a WordIndex,
) -> impl Iterator<Item = Vec<&'a str>> + 'a {
    cover
        .members()
        .iter()
        .map(|&signature| index.anagrams(signature).iter().map(String::as_str))
        .multi_cartesian_product()
}

/// How many combinations [`combinations`] yields, without materializing them:
/// the product of the member anagram class sizes.
pub fn combination_count(cover: &Cover, index: &WordIndex) -> usize {
    cover
        .members()
        .iter()
        .map(|&signature| index.anagrams(signature).len())
        .product()
}
