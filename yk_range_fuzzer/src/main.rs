
extern crate yk_range;
extern crate rand;

mod rnd;
mod range_gen;
mod check;

use std::io::Write;
use clap::Parser;
use env_logger::Target;
use log::LevelFilter;
use check::{CheckError, Oracle};
use range_gen::*;
use rnd::*;

#[derive(Parser, Debug)]
#[command(name = "yk_range_fuzzer", about = "Randomized property checks of the range algebra")]
struct Options {
    /// Seed of the random generator, the current time when not given
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 10000)]
    iterations: usize,

    /// Number of distinct endpoint values to draw from
    #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(i32).range(1..10000))]
    domain: i32,

    /// Repeat for more output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(opts: &Options) -> Result<(), CheckError> {
    let mut strat = AnyRange::new();
    strat.add(RandomRange::with_domain(opts.domain));
    strat.add(PointRange::with_domain(opts.domain));
    let oracle = Oracle::with_domain(opts.domain);
    let values = -1..(2 * opts.domain + 1);

    for i in 0..opts.iterations {
        let a = strat.generate()?;
        let b = strat.generate()?;
        let v = rand_range(&values);
        log::trace!("#{}: {:?}, {:?}, {}", i, a, b, v);

        oracle.expand_never_shrinks(&a, v, rand_bool())?;
        oracle.combine_is_hull(&a, &b)?;
        oracle.intersect_matches(&a, &b)?;
        oracle.contains_matches(&a, v)?;
        oracle.plain_membership(*a.low().value(), *a.high().value(), v)?;

        if (i + 1) % 1000 == 0 {
            log::debug!("{} iterations done", i + 1);
        }
    }
    Ok(())
}

fn main() {
    let opts = Options::parse();
    env_logger::builder()
        .filter_level(match opts.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .target(Target::Stdout)
        .init();

    log::debug!("Options: {:?}", opts);

    set_seed(opts.seed.unwrap_or_else(seed_from_system_time));
    log::info!("seed: {}", current_seed());

    match run(&opts) {
        Ok(()) => log::info!("{} iterations passed", opts.iterations),
        Err(err) => {
            log::error!("{}", err);
            log::error!("reproduce with --seed {} --domain {}", current_seed(), opts.domain);
            std::process::exit(1);
        },
    }
}
