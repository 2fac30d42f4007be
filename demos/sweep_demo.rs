use std::time::Instant;

use clap::Parser;
use clap::ValueEnum;
use rehash_sweep::sweep;
use rehash_sweep::sweep::SweepConfig;
use rehash_sweep::table::StdTable;
use rehash_sweep::workload;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Operation {
    Copy,
    Filter,
    Both,
}

#[derive(Parser, Debug)]
struct Args {
    /// Workload sizes to sweep, in order.
    #[arg(short = 's', long = "sizes", num_args = 1.., default_values_t = sweep::DEFAULT_SIZES)]
    sizes: Vec<usize>,

    #[arg(short = 'o', long = "operation", value_enum, default_value = "both")]
    operation: Operation,
}

fn run_sizes(label: &str, sizes: &[usize], workload: fn(usize)) {
    println!("{label} sweep:");
    for &size in sizes {
        let start = Instant::now();
        workload(size);
        println!("  size {:>8}: ok in {:?}", size, start.elapsed());
    }
}

fn main() {
    let args = Args::parse();
    let config = SweepConfig::new(args.sizes);

    match args.operation {
        Operation::Copy => run_sizes("copy", config.sizes(), workload::copy_workload::<StdTable>),
        Operation::Filter => run_sizes(
            "filter",
            config.sizes(),
            workload::filter_workload::<StdTable>,
        ),
        Operation::Both => {
            run_sizes("copy", config.sizes(), workload::copy_workload::<StdTable>);
            run_sizes(
                "filter",
                config.sizes(),
                workload::filter_workload::<StdTable>,
            );
        }
    }

    println!("All count checks passed");
}
