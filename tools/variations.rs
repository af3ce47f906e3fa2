/// Variations: print every way the lexicalizer can refer to a book.
///
/// Usage: booklex-variations --title <t> [--title <t> ...] --author <a> [--author <a> ...]
///                           [--seed <n>] [--xml]

use booklex::core::hlds::to_hlds_xml;
use booklex::core::variations::{authors_variations, title_variations};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::error;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booklex=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut titles = Vec::new();
    let mut authors = Vec::new();
    let mut seed: u64 = 42;
    let mut xml = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--title" if i + 1 < args.len() => {
                i += 1;
                titles.push(args[i].clone());
            }
            "--author" if i + 1 < args.len() => {
                i += 1;
                authors.push(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(42);
            }
            "--xml" => xml = true,
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut rng = StdRng::seed_from_u64(seed);

    let author_set = match authors_variations(&authors) {
        Ok(set) => set,
        Err(e) => {
            error!("cannot lexicalize authors: {}", e);
            std::process::exit(1);
        }
    };
    let title_set = match title_variations(&titles, &authors, &mut rng) {
        Ok(set) => set,
        Err(e) => {
            error!("cannot lexicalize titles: {}", e);
            std::process::exit(1);
        }
    };

    println!("=== Authors ({}) ===", author_set.len());
    for (name, diamond) in author_set.iter() {
        println!("{:<12} {}", name, diamond);
    }

    println!("\n=== Titles ({}) ===", title_set.len());
    for (name, diamond) in title_set.iter() {
        if xml {
            println!("-- {}", name);
            print!("{}", to_hlds_xml(diamond));
        } else {
            println!("{:<45} {}", name, diamond);
        }
    }
}

fn print_usage() {
    println!("Usage: booklex-variations --title <t> --author <a> [--author <a> ...]");
    println!("                          [--seed <n>] [--xml]");
    println!();
    println!("Prints the author and title variation dictionaries of a book.");
}
