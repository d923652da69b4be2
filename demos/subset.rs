//! Subset client for randq
//!
//! Reads whitespace-separated tokens from standard input and prints exactly `k` of them,
//! chosen uniformly at random, one per line. Each token is printed at most once.
//!
//! ```text
//! $ echo A B C D E F G H I | cargo run --example subset -- 3
//! C
//! G
//! A
//! ```

use randq::queue::RandomizedQueue;
use std::io::{self, BufWriter, Read, Write};
use std::process::ExitCode;

const USAGE: &str = "usage: subset <k> < input";

/// Parse `k` from the first command-line argument
fn parse_k(arg: Option<String>) -> Result<usize, String> {
    let arg = arg.ok_or_else(|| String::from(USAGE))?;
    arg.parse()
        .map_err(|e| format!("invalid k {:?}: {}\n{}", arg, e, USAGE))
}

/// Pick `k` distinct tokens of `input` uniformly at random
fn select(k: usize, input: &str) -> Result<Vec<&str>, String> {
    let mut queue = RandomizedQueue::new();
    for token in input.split_whitespace() {
        queue.enqueue(token);
    }

    if k > queue.len() {
        return Err(format!("k = {} exceeds the {} tokens read", k, queue.len()));
    }

    (0..k)
        .map(|_| queue.dequeue().map_err(|e| e.to_string()))
        .collect()
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let k = parse_k(std::env::args().nth(1))?;

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let picked = select(k, &input)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for token in picked {
        writeln!(out, "{}", token)?;
    }
    out.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("subset: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const INPUT: &str = "A B C D E F G H I";

    #[test]
    fn test_parse_k_accepts_non_negative_integers() {
        assert_eq!(parse_k(Some("3".into())), Ok(3));
        assert_eq!(parse_k(Some("0".into())), Ok(0));
    }

    #[test]
    fn test_parse_k_missing_prints_usage() {
        assert_eq!(parse_k(None), Err(USAGE.to_string()));
    }

    #[test]
    fn test_parse_k_rejects_non_numeric() {
        for bad in ["three", "-1", "", "2.5"] {
            let err = parse_k(Some(bad.into())).unwrap_err();
            assert!(err.starts_with("invalid k"), "{}", err);
            assert!(err.ends_with(USAGE));
        }
    }

    #[test]
    fn test_select_rejects_k_above_token_count() {
        assert_eq!(
            select(10, INPUT),
            Err(String::from("k = 10 exceeds the 9 tokens read"))
        );
        assert!(select(1, "   \n").is_err());
    }

    #[test]
    fn test_select_distinct_tokens_from_input() {
        let tokens: HashSet<_> = INPUT.split_whitespace().collect();
        let picked = select(3, INPUT).unwrap();

        assert_eq!(picked.len(), 3);
        assert_eq!(picked.iter().collect::<HashSet<_>>().len(), 3);
        assert!(picked.iter().all(|p| tokens.contains(p)));
    }

    #[test]
    fn test_select_all_tokens_yields_each_exactly_once() {
        let mut picked = select(9, INPUT).unwrap();
        picked.sort_unstable();
        assert_eq!(picked, INPUT.split_whitespace().collect::<Vec<_>>());
    }

    #[test]
    fn test_select_zero_is_empty() {
        assert_eq!(select(0, INPUT), Ok(Vec::new()));
        assert_eq!(select(0, ""), Ok(Vec::new()));
    }
}
