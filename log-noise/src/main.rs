mod args;
mod generator;

use std::fs::File;
use std::io::{BufWriter, Write};

use args::{CliArgs, LineFormat};
use chrono::{Duration, NaiveDate};
use clap::Parser;
use generator::{generate_access_line, generate_json_line, generate_noise_line};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), std::io::Error> {
    let seed = args.seed().unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    // Fixed base so a given seed always produces the same timestamps.
    let mut timestamp = NaiveDate::from_ymd_opt(2024, 1, 1)
        .expect("valid base date")
        .and_hms_opt(0, 0, 0)
        .expect("valid base time");

    let file = File::create(args.output())?;
    let mut writer = BufWriter::new(file);
    for _ in 0..*args.lines() {
        timestamp += Duration::seconds(rng.random_range(1..30));
        let line = match args.format() {
            LineFormat::Access => {
                if rng.random_range(0..100) < *args.noise() {
                    generate_noise_line(&mut rng)
                } else {
                    generate_access_line(&mut rng, timestamp)
                }
            }
            LineFormat::Json => generate_json_line(&mut rng, timestamp),
        };
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    println!(
        "wrote {} lines to {} (seed {seed})",
        args.lines(),
        args.output().display()
    );
    Ok(())
}
