// wordchain-chains: find the longest anagram derivation chains.
//
// Loads a dictionary (one word per line) and, for each starting word,
// reports the longest chains where every step inserts exactly one character
// into the previous word's letters. Starting words are taken from the
// command line, or from stdin (one per line) when none are given.
//
// Usage:
//   wordchain-chains -d DICT_PATH [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH    Dictionary file, one word per line (required)
//   --max-fanout N          Tied best next steps kept per word (default 100)
//   --max-word-len N        Skip words longer than N bytes (default 255)
//   --max-dict-size N       Truncate input after N words (default 1000000)
//   --index-capacity N      Anagram index slots (default 1000003, prime)
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use wordchain_core::EngineConfig;
use wordchain_engine::{ChainFinder, SearchResult};

fn print_help() {
    println!("wordchain-chains: find the longest anagram derivation chains.");
    println!();
    println!("Usage: wordchain-chains -d DICT_PATH [OPTIONS] [WORD...]");
    println!();
    println!("Each chain step inserts exactly one character into the previous");
    println!("word's letters. Starting words come from the command line, or");
    println!("from stdin (one per line) when none are given.");
    println!();
    println!("Options:");
    println!("  -d, --dict-path PATH    Dictionary file, one word per line");
    println!("  --max-fanout N          Tied best next steps kept per word (default 100)");
    println!("  --max-word-len N        Skip words longer than N bytes (default 255)");
    println!("  --max-dict-size N       Truncate input after N words (default 1000000)");
    println!("  --index-capacity N      Anagram index slots (default 1000003)");
    println!("  -h, --help              Print this help");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if wordchain_cli::wants_help(&args) {
        print_help();
        return;
    }

    let (dict_path, args) = wordchain_cli::parse_dict_path(&args);
    let (max_fanout, args) = wordchain_cli::parse_usize_flag(&args, "--max-fanout");
    let (max_word_len, args) = wordchain_cli::parse_usize_flag(&args, "--max-word-len");
    let (max_dict_size, args) = wordchain_cli::parse_usize_flag(&args, "--max-dict-size");
    let (index_capacity, start_words) = wordchain_cli::parse_usize_flag(&args, "--index-capacity");

    let Some(dict_path) = dict_path else {
        wordchain_cli::fatal("no dictionary given (use -d PATH)");
    };

    let mut config = EngineConfig::default();
    if let Some(n) = max_fanout {
        config.max_fanout = n;
    }
    if let Some(n) = max_word_len {
        config.max_word_len = n;
    }
    if let Some(n) = max_dict_size {
        config.max_dict_size = n;
    }
    if let Some(n) = index_capacity {
        config.index_capacity = n;
    }

    let words = wordchain_cli::load_words(&dict_path).unwrap_or_else(|e| wordchain_cli::fatal(&e));

    let (mut finder, stats) = ChainFinder::build(words, config)
        .unwrap_or_else(|e| wordchain_cli::fatal(&e.to_string()));

    if stats.truncated {
        eprintln!(
            "warning: dictionary truncated after {} words (--max-dict-size)",
            stats.accepted
        );
    }
    eprintln!(
        "loaded {} word entries ({} skipped)",
        stats.accepted, stats.skipped
    );

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if start_words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            report(&mut out, &mut finder, word);
        }
    } else {
        for word in &start_words {
            report(&mut out, &mut finder, word);
        }
    }
}

fn report<W: Write>(out: &mut W, finder: &mut ChainFinder, word: &str) {
    match finder.search(word) {
        None => {
            let _ = writeln!(out, "'{word}' is not found in the dictionary.");
        }
        Some(SearchResult { max_len, chains }) if max_len <= 1 => {
            let _ = writeln!(out, "No derived anagram chain found starting from '{word}'.");
            debug_assert!(chains.is_empty());
        }
        Some(SearchResult { max_len, chains }) => {
            let _ = writeln!(out, "Max chain length: {max_len} words.");
            for (i, chain) in chains.iter().enumerate() {
                let _ = writeln!(out, "Chain {}: {}", i + 1, chain.join(" -> "));
            }
            let _ = writeln!(out, "Total longest chains found: {}", chains.len());
        }
    }
    let _ = out.flush();
}
