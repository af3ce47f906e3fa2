/// Preview: lexicalize a text plan and print the resulting trees.
///
/// Usage: booklex-preview --plan <path> [--profile <path>] [--seed <n>]
///                        [--format xml|tree] [--testbed <out.xml>]
///
/// The plan file holds a RON list of text plans. Every block of every plan
/// is lexicalized; trees are printed as HLDS XML (default) or in the compact
/// bracket notation. With `--testbed`, the trees are also written as a
/// regression file for `ccg-realize`.

use booklex::core::hlds::{to_hlds_xml, write_testbed_file};
use booklex::core::pipeline::Lexicalizer;
use booklex::schema::diamond::Diamond;
use booklex::schema::message::TextPlan;
use std::fs::File;
use std::path::Path;
use tracing::{error, info};

#[derive(Clone, Copy, PartialEq)]
enum Format {
    Xml,
    Tree,
}

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

    let mut plan_path = None;
    let mut profile_path = None;
    let mut testbed_path = None;
    let mut seed: u64 = 42;
    let mut format = Format::Xml;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--plan" if i + 1 < args.len() => {
                i += 1;
                plan_path = Some(args[i].clone());
            }
            "--profile" if i + 1 < args.len() => {
                i += 1;
                profile_path = Some(args[i].clone());
            }
            "--testbed" if i + 1 < args.len() => {
                i += 1;
                testbed_path = Some(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(42);
            }
            "--format" if i + 1 < args.len() => {
                i += 1;
                format = match args[i].as_str() {
                    "xml" => Format::Xml,
                    "tree" => Format::Tree,
                    other => {
                        eprintln!("Unknown format: {}", other);
                        print_usage();
                        std::process::exit(1);
                    }
                };
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let Some(plan_path) = plan_path else {
        eprintln!("Missing --plan");
        print_usage();
        std::process::exit(1);
    };

    let plans = match TextPlan::load_from_ron(Path::new(&plan_path)) {
        Ok(plans) => plans,
        Err(e) => {
            error!("failed to load {}: {}", plan_path, e);
            std::process::exit(1);
        }
    };

    let mut builder = Lexicalizer::builder().seed(seed);
    if let Some(ref path) = profile_path {
        builder = builder.profile_path(path);
    }
    let mut lexicalizer = match builder.build() {
        Ok(l) => l,
        Err(e) => {
            error!("failed to build lexicalizer: {}", e);
            std::process::exit(1);
        }
    };

    info!(plans = plans.len(), seed, "lexicalizing");

    let mut all_trees: Vec<Diamond> = Vec::new();
    let mut errors = 0;
    for (n, plan) in plans.iter().enumerate() {
        println!("=== Plan {}: {} ===", n + 1, plan.book.titles.join(" / "));
        match lexicalizer.lexicalize_plan(plan) {
            Ok(trees) => {
                for tree in &trees {
                    match format {
                        Format::Xml => print!("{}", to_hlds_xml(tree)),
                        Format::Tree => println!("{}", tree),
                    }
                }
                all_trees.extend(trees);
            }
            Err(e) => {
                errors += 1;
                println!("[ERROR] {}", e);
            }
        }
        println!();
    }

    println!("{} trees, {} failed plans", all_trees.len(), errors);

    if let Some(path) = testbed_path {
        let written = File::create(&path).and_then(|file| write_testbed_file(file, &all_trees));
        match written {
            Ok(()) => info!("wrote testbed to {}", path),
            Err(e) => {
                error!("failed to write {}: {}", path, e);
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Usage: booklex-preview --plan <path> [--profile <path>] [--seed <n>]");
    println!("                       [--format xml|tree] [--testbed <out.xml>]");
    println!();
    println!("Options:");
    println!("  --plan <path>      RON file with a list of text plans");
    println!("  --profile <path>   RON lexicalization profile (optional)");
    println!("  --seed <n>         RNG seed (default: 42)");
    println!("  --format <f>       xml (default) or tree");
    println!("  --testbed <path>   also write a regression file for ccg-realize");
}
