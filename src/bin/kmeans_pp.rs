//! Run k-means++ seeding and Lloyd refinement on a `.npy` matrix.
//!
//! Prints the seeding indices on the first line, then one line per final
//! centroid with 4 decimals per coordinate.
//!
//! Usage: `kmeans-pp <input.npy> <k> <max_iters> <eps> [seed]`

use kmeanspp_rs::{cluster_report, KMeansConfig};
use ndarray::Array2;
use ndarray_npy::ReadNpyExt;
use std::env;
use std::fs::File;
use std::io::BufReader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 5 && args.len() != 6 {
        eprintln!(
            "Usage: {} <input.npy> <k> <max_iters> <eps> [seed]",
            args[0]
        );
        std::process::exit(1);
    }

    let input_path = &args[1];
    let k: usize = args[2].parse()?;
    let max_iters: usize = args[3].parse()?;
    let eps: f64 = args[4].parse()?;
    let seed: u64 = match args.get(5) {
        Some(s) => s.parse()?,
        None => KMeansConfig::default().seed,
    };

    let reader = BufReader::new(File::open(input_path)?);
    let points: Array2<f64> = Array2::read_npy(reader)?;

    eprintln!(
        "Loaded data: {} samples x {} features",
        points.nrows(),
        points.ncols()
    );

    let report = cluster_report(&points.view(), k, max_iters, eps, seed)?;
    println!("{}", report);

    Ok(())
}
