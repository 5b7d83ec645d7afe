use clap::Parser;

use perf_bench::*;

/// Sustained memory bandwidth (copy/scale/add/triad) over three f64 arrays.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Elements per array.
    #[arg(long, default_value_t = DEFAULT_LEN)]
    len: usize,

    /// Repetitions of each kernel.
    #[arg(long, default_value_t = DEFAULT_NTIMES)]
    ntimes: usize,
}

fn main() {
    let args = Args::parse();

    let report = run_stream(args.len, args.ntimes).rounded();

    match serde_json::to_string(&report) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            eprintln!("Failed to serialize results: {}", e);
            std::process::exit(1);
        }
    }
}
