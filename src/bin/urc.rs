//! Unate recursive complement driver.
//!
//! Reads each input PCN file, complements the function and writes the
//! result under the output directory, preserving the file name.

use clap::Parser;
use log::{debug, info};
use pcnkit::{io, Cube};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "urc")]
#[command(about = "Complement sum-of-products functions stored in PCN files", long_about = None)]
#[command(version)]
struct Args {
    /// Input PCN files
    #[arg(value_name = "FILE", required = true)]
    inputs: Vec<PathBuf>,

    /// Directory receiving the complemented files
    #[arg(short, long, value_name = "DIR", default_value = "out")]
    output: PathBuf,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("urc: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(&args.output)?;

    for input in &args.inputs {
        let sop = io::read_pcn(input)?;
        debug!(
            "{}: support of {} of {} variables",
            input.display(),
            sop.support().len(),
            sop.arity()
        );
        if sop.len() <= 8 {
            let terms: Vec<String> = sop.iter().map(Cube::formula).collect();
            debug!("{}: F = {}", input.display(), terms.join(" + "));
        }

        let result = sop.complement();
        info!(
            "{}: complement has {} cubes",
            input.display(),
            result.len()
        );

        let name = input
            .file_name()
            .ok_or_else(|| format!("'{}' has no file name", input.display()))?;
        io::write_pcn(args.output.join(name), &result)?;
    }
    Ok(())
}
