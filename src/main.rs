// Wordhunt – A word search game
// Copyright (C) 2026  Wordhunt authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::collections::HashMap;
use std::ffi::OsString;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use wordhunt::placement::{self, Config};
use wordhunt::puzzle::Puzzle;

#[derive(Parser)]
#[command(name = "wordhunt")]
struct Cli {
    /// Vocabulary file, one word per line or a JSON object whose keys
    /// are words
    #[arg(required = true, value_name = "WORDS")]
    vocabulary: OsString,
    #[arg(short = 'W', long, value_name = "CELLS", default_value_t = 10)]
    width: u32,
    #[arg(short = 'H', long, value_name = "CELLS", default_value_t = 10)]
    height: u32,
    #[arg(short, long, value_name = "COUNT", default_value_t = 10)]
    n_words: usize,
    #[arg(short, long, value_name = "LENGTH", default_value_t = 3)]
    minimum_length: usize,
    #[arg(short, long, value_name = "CELLS", default_value_t = 5)]
    expand_step: u32,
    #[arg(long, value_name = "COUNT", default_value_t = 100)]
    max_expansions: u32,
    /// Leave unused cells as the empty marker instead of filling them
    /// with random letters
    #[arg(long)]
    no_fill: bool,
    /// Print the puzzle as JSON instead of text
    #[arg(short, long)]
    json: bool,
}

fn read_vocabulary<P: AsRef<Path>>(
    filename: P,
) -> Result<Vec<String>, std::io::Error> {
    let filename = filename.as_ref();

    // Word lists like the dwyl english-words collection come as a JSON
    // object mapping each word to a dummy value
    if filename.extension().is_some_and(|extension| extension == "json") {
        let contents = std::fs::read_to_string(filename)?;
        let words =
            serde_json::from_str::<HashMap<String, serde_json::Value>>(
                &contents,
            ).map_err(|e| {
                std::io::Error::new(std::io::ErrorKind::InvalidData, e)
            })?;

        return Ok(words.into_keys().collect());
    }

    let mut words = Vec::new();

    for line in BufReader::new(std::fs::File::open(filename)?).lines() {
        let line = line?;
        let line = line.trim();

        if !line.is_empty() && !line.starts_with('#') {
            words.push(line.to_string());
        }
    }

    Ok(words)
}

#[derive(Serialize)]
struct JsonWord<'a> {
    word: &'a str,
    start: (u32, u32),
    end: (u32, u32),
}

#[derive(Serialize)]
struct JsonPuzzle<'a> {
    width: u32,
    height: u32,
    rows: Vec<String>,
    words: Vec<JsonWord<'a>>,
}

fn print_json(puzzle: &Puzzle) -> Result<(), serde_json::Error> {
    let grid = puzzle.grid();

    let rows = (0..grid.height())
        .map(|y| (0..grid.width()).map(|x| grid.at(x, y)).collect())
        .collect::<Vec<String>>();

    let words = puzzle.words().iter().map(|word| {
        JsonWord {
            word: &word.word,
            start: word.start,
            end: word.end,
        }
    }).collect::<Vec<JsonWord>>();

    let document = JsonPuzzle {
        width: grid.width(),
        height: grid.height(),
        rows,
        words,
    };

    println!("{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}

fn print_text(puzzle: &Puzzle) {
    print!("{}", puzzle.grid());

    println!();

    for word in puzzle.words() {
        println!(
            "{} ({}, {}) to ({}, {})",
            word.word,
            word.start.0, word.start.1,
            word.end.0, word.end.1,
        );
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let vocabulary = match read_vocabulary(&cli.vocabulary) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{}: {}", cli.vocabulary.to_string_lossy(), e);
            return ExitCode::FAILURE;
        },
    };

    let config = Config {
        width: cli.width,
        height: cli.height,
        n_words: cli.n_words,
        minimum_length: cli.minimum_length,
        expand_step: cli.expand_step,
        max_expansions: cli.max_expansions,
        fill_letters: !cli.no_fill,
    };

    let puzzle = match placement::generate(vocabulary.iter(), &config) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    if cli.json {
        if let Err(e) = print_json(&puzzle) {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    } else {
        print_text(&puzzle);
    }

    ExitCode::SUCCESS
}
