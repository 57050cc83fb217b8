use std::process::ExitCode;

use clap::Parser;

use sort_basics_rs::{order, patterns, registry};

/// Run one of the classic sorting algorithms over random integers.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Sorting function to run (e.g. bubble_sort, merge_sort, quick_sort)
    sort: String,

    /// How many random integers to generate
    #[arg(default_value_t = 20)]
    num: usize,

    /// Values are sampled uniformly from [1..=max]
    #[arg(default_value_t = 50)]
    max: i32,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let sort_fn = match registry::lookup(&args.sort) {
        Ok(f) => f,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    // Guard against an empty sampling range for max < 1.
    let mut items = patterns::random_uniform(args.num, 1..=args.max.max(1));

    println!("Initial items: {items:?}");
    println!("Sorted order?  {}", order::is_sorted(&items));
    println!("Sorting items with {}(items)", args.sort);
    sort_fn(&mut items);
    println!("Sorted items:  {items:?}");
    println!("Sorted order?  {}", order::is_sorted(&items));

    ExitCode::SUCCESS
}
