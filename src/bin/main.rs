use anagram_core::loader::{self, TokenPolicy};
use anagram_core::{report, AnagramIndex};
use crossterm::style::Stylize;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: {} <filename>", args[0]);
        process::exit(1);
    }
    let filename = &args[1];

    println!("reading input file '{}'...", filename);
    let index = match loader::index_from_path(Path::new(filename), TokenPolicy::All) {
        Ok(index) => index,
        Err(err) => {
            eprintln!("error: could not open file '{}': {}", filename, err);
            process::exit(1);
        }
    };

    println!("enter a word and I will list the words it is an anagram of.");
    println!("  when you are done, type ctrl-d (ctrl-z on windows)");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt(&mut stdout);

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        for word in line.split_whitespace() {
            answer_query(&index, word, filename);
        }
        prompt(&mut stdout);
    }

    // stdin is exhausted; dump the summary.
    println!();
    print!("{}", report::render(&index));
}

fn answer_query(index: &AnagramIndex, word: &str, filename: &str) {
    match index.lookup(word) {
        Some(group) => {
            println!("{}", "the following words have been found:".bold());
            for member in &group.words {
                println!("  {}", member);
            }
        }
        None => {
            println!(
                "sorry, '{}' does not appear in the input file '{}'",
                word, filename
            );
        }
    }
}

fn prompt(stdout: &mut io::Stdout) {
    print!("{} ", ">".bold());
    let _ = stdout.flush();
}
