use anyhow::Result;
use itertools::Itertools;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Instant;

use letter_cover::{combinations, search_with, Ranking, WordIndex};

const WORD_LEN: usize = 5;

fn main() -> Result<()> {
    let start = Instant::now();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "words_alpha.txt".to_string());
    let wordfile = BufReader::new(File::open(&path)?);
    let all_words: Vec<String> = wordfile.lines().try_collect()?;

    // Only words of the target length.
    let target_words = all_words
        .iter()
        .map(|w| w.trim())
        .filter(|w| w.len() == WORD_LEN)
        .collect_vec();

    let index = WordIndex::build(target_words, WORD_LEN);
    let candidates = index.candidates();

    let ranking = Ranking::new(&candidates);
    println!("--- Letters and occurrences");
    for step in ranking.steps() {
        println!("{} -> {}", step.letter().letter(), step.count());
    }
    println!("--- Letters and words count associated to it");
    for step in ranking.steps() {
        println!("{} -> {}", step.letter().letter(), step.bucket().len());
    }

    println!("--- Starting the solver loop");
    let covers = search_with(&ranking, |report| {
        println!(
            "{} -> Words to check {}",
            report.letter.letter(),
            report.candidates
        );
        println!(
            "{} -> Current solution {}",
            report.letter.letter(),
            report.survivors
        );
    });

    let word_sets = covers
        .iter()
        .flat_map(|cover| combinations(cover, &index))
        .map(|combo| combo.into_iter().sorted().collect_vec())
        .sorted()
        .collect_vec();
    for combo in &word_sets {
        println!("{}", combo.iter().join(" "));
    }

    println!();
    println!(
        "Total possibilities including anagrams: {}",
        word_sets.len()
    );
    println!();
    println!("Total possibilities excluding anagrams: {}", covers.len());

    println!("{:.3} seconds", start.elapsed().as_secs_f64());
    Ok(())
}
