//! Bimba CLI - apply a bitmap filter to an image file.

use anyhow::Context;
use bimba::prelude::*;
use std::process::ExitCode;

const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprint!("{}", usage(&args[0]));
        return ExitCode::from(EXIT_USAGE);
    }

    match args[1].as_str() {
        "list" => {
            list_filters();
            ExitCode::SUCCESS
        }
        "help" | "--help" | "-h" => {
            print!("{}", usage(&args[0]));
            ExitCode::SUCCESS
        }
        selector => {
            let filter = match selector.parse::<Filter>() {
                Ok(filter) => filter,
                Err(e) => {
                    eprintln!("Error: {e}");
                    eprint!("{}", usage(&args[0]));
                    return ExitCode::from(EXIT_USAGE);
                }
            };

            if args.len() != 4 {
                eprintln!("Error: expected input and output paths");
                eprint!("{}", usage(&args[0]));
                return ExitCode::from(EXIT_USAGE);
            }

            match process(filter, &args[2], &args[3]) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error: {e:#}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// Usage text, printed to stdout for explicit `help` and to stderr for
/// usage errors.
fn usage(program: &str) -> String {
    let mut text = format!("Usage: {program} <filter> <input> <output>\n\n");
    text.push_str("Commands:\n");
    text.push_str("  <filter> <in> <out>   Apply a filter (see below) to an image\n");
    text.push_str("  list                  List available filters\n");
    text.push_str("  help                  Show this help message\n\n");
    text.push_str("Filters:\n");
    for filter in Filter::ALL {
        text.push_str(&format!(
            "  {:<10} {}\n",
            filter.id(),
            filter.description()
        ));
    }
    text
}

fn list_filters() {
    println!("Available filters ({} total):", Filter::ALL.len());
    for filter in Filter::ALL {
        println!("  - {} - {}", filter.id(), filter.description());
    }
}

fn process(filter: Filter, input: &str, output: &str) -> anyhow::Result<()> {
    let mut grid = load_grid(input).with_context(|| format!("failed to read {input}"))?;
    filter.apply(&mut grid)?;
    save_grid(&grid, output).with_context(|| format!("failed to write {output}"))?;
    println!("{input} -> {output} ({filter})");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_lists_every_filter() {
        let text = usage("bimba");
        assert!(text.starts_with("Usage: bimba"));
        for filter in Filter::ALL {
            assert!(text.contains(filter.id()));
        }
    }
}
