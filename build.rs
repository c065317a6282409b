//! Embeds the word lists under `data/` as const arrays
//!
//! Entries are trimmed and uppercased and blank lines dropped. Entries with
//! non-letter characters are skipped with a cargo warning.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

struct WordList {
    source: &'static str,
    target: &'static str,
    name: &'static str,
    doc: &'static str,
}

const LISTS: [WordList; 2] = [
    WordList {
        source: "data/answers.txt",
        target: "answers.rs",
        name: "ANSWERS",
        doc: "Words that may be drawn as the hidden target",
    },
    WordList {
        source: "data/allowed.txt",
        target: "allowed.rs",
        name: "ALLOWED",
        doc: "Every word accepted as a guess (a superset of ANSWERS)",
    },
];

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    for list in &LISTS {
        println!("cargo:rerun-if-changed={}", list.source);
        let raw = fs::read_to_string(list.source)
            .unwrap_or_else(|e| panic!("cannot read {}: {e}", list.source));
        let code = render(list, &raw);
        fs::write(out_dir.join(list.target), code)
            .unwrap_or_else(|e| panic!("cannot write {}: {e}", list.target));
    }
}

fn render(list: &WordList, raw: &str) -> String {
    let mut words = Vec::new();
    for (number, line) in raw.lines().enumerate() {
        let word = line.trim().to_uppercase();
        if word.is_empty() {
            continue;
        }
        if !word.bytes().all(|b| b.is_ascii_uppercase()) {
            println!(
                "cargo:warning={}:{}: skipping {word:?}",
                list.source,
                number + 1
            );
            continue;
        }
        words.push(word);
    }

    let mut code = format!("/// {}\npub const {}: &[&str] = &[\n", list.doc, list.name);
    for word in &words {
        let _ = writeln!(code, "    {word:?},");
    }
    let _ = write!(
        code,
        "];\n\n/// Number of words in {name}\npub const {name}_COUNT: usize = {count};\n",
        name = list.name,
        count = words.len()
    );
    code
}
