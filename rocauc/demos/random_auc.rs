//! AUC of random predictions against random labels.
//!
//! Random scores should land near 0.5; scoring the labels by themselves
//! gives 1.0. Set `RUST_LOG=rocauc=debug` to see the computation events.
//!
//! ```text
//! cargo run --release -p rocauc --example random_auc [n] [seed]
//! ```

use clap::Parser;
use rocauc::{auc_report, compute_auc, AucConfig, Summarizable};
use tracing_subscriber::EnvFilter;

/// AUC of random scores against random labels.
#[derive(Parser, Debug)]
#[command(name = "random_auc", about = "AUC of random scores against random labels")]
struct Args {
    /// Number of scored items.
    #[arg(default_value_t = 1_000_000)]
    n: usize,

    /// Seed for the score and label generator.
    #[arg(default_value_t = 42)]
    seed: u64,
}

struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.0
    }

    /// Uniform in `[0, 1)`.
    fn uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn label(&mut self) -> u8 {
        (self.next_u64() >> 63) as u8
    }
}

fn main() -> rocauc::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = Lcg(args.seed);
    let labels: Vec<u8> = (0..args.n).map(|_| rng.label()).collect();
    let scores: Vec<f64> = (0..args.n).map(|_| rng.uniform()).collect();

    let report = auc_report(&scores, &labels, &AucConfig::default())?;
    println!("random scores:  {}", report.summary());

    let perfect: Vec<f64> = labels.iter().map(|&l| f64::from(l)).collect();
    println!("labels as scores: auc={}", compute_auc(&perfect, &labels)?);

    Ok(())
}
