//! Simple CLI that reads HTML from stdin and prints the extracted document.
//!
//! Usage: `extract_stdin <page-url> [--json]`
//!
//! Prints a Markdown document with a provenance header by default, or the
//! JSON wire shape with `--json`.

use std::io::{self, Read};

use docsift::extract_html;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let url = match args.first() {
        Some(url) => url.clone(),
        None => {
            eprintln!("usage: extract_stdin <page-url> [--json]");
            std::process::exit(2);
        }
    };
    let as_json = args.iter().any(|a| a == "--json");

    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let doc = extract_html(&html, &url);

    if as_json {
        match doc.to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Failed to serialize: {err}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", doc.to_markdown_document());
    }
}
