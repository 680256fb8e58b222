use clap::Parser;

use plotters::prelude::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

use arftools::datasets::{gen_arti, DataModel};
use arftools::plots::plot_data;
use arftools::split::split_train_test;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long, default_value_t = 0)]
    model: u8,

    #[clap(short, long, default_value_t = 1000)]
    nbex: usize,

    #[clap(long, default_value_t = 1.)]
    center: f64,

    #[clap(long, default_value_t = 0.1)]
    sigma: f64,

    #[clap(long, default_value_t = 0.02)]
    epsilon: f64,

    #[clap(long, default_value_t = 0.8)]
    ratio: f64,

    #[clap(long)]
    balanced: bool,

    #[clap(long, default_value_t = 42)]
    seed: u64,

    #[clap(short, long, default_value = "plots/gen_data.svg")]
    output: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let model = DataModel::from_code(args.model).ok_or("model must be 0, 1 or 2")?;

    let mut rng = StdRng::seed_from_u64(args.seed);

    let (data, labels) = gen_arti(
        args.center,
        args.sigma,
        args.nbex,
        model,
        args.epsilon,
        &mut rng,
    );

    let (train, test) = split_train_test(
        labels.as_slice().unwrap(),
        args.ratio,
        args.balanced,
        &mut rng,
    );

    println!(
        "{} examples generated, split into {} train / {} test",
        labels.len(),
        train.len(),
        test.len()
    );

    if let Some(parent) = std::path::Path::new(&args.output).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let drawing_area = SVGBackend::new(&args.output, (800, 600)).into_drawing_area();

    plot_data(&data, Some(&labels), "synthetic dataset", &drawing_area)?;

    drawing_area.present()?;

    println!("plot written to {}", args.output);

    Ok(())
}
