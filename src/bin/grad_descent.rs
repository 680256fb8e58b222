use clap::Parser;

use plotters::prelude::*;

use ndarray::ArrayView1;

use rand::rngs::StdRng;
use rand::SeedableRng;

use arftools::optim::{optimize_grad, Objective};
use arftools::plots::{plot_frontiere, plot_trace};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(long, default_value_t = 0.05)]
    eps: f64,

    #[clap(long, default_value_t = 100)]
    max_iter: usize,

    #[clap(long, default_value_t = 42)]
    seed: u64,

    #[clap(short, long, default_value = "plots/grad_descent.svg")]
    output: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let objective = Objective::new(
        |x: ArrayView1<f64>| x.dot(&x),
        |x: ArrayView1<f64>| &x * 2.,
        2,
    );

    let mut rng = StdRng::seed_from_u64(args.seed);

    let trace = optimize_grad(&objective, args.eps, args.max_iter, None, &mut rng);

    if trace.is_empty() {
        println!("nothing to do with --max-iter 0");
        return Ok(());
    }

    println!(
        "{} steps, f went from {:.3e} to {:.3e}",
        trace.len(),
        trace.values[0],
        trace.values[trace.len() - 1]
    );

    if let Some(parent) = std::path::Path::new(&args.output).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let drawing_area = SVGBackend::new(&args.output, (1200, 600)).into_drawing_area();

    let (left, right) = drawing_area.split_horizontally(600);

    // level regions of the bowl, positive inside the unit circle
    let decision = |points: &ndarray::Array2<f64>| {
        points
            .outer_iter()
            .map(|row| 1. - (row[0].powi(2) + row[1].powi(2)))
            .collect()
    };

    let mut chart_context =
        plot_frontiere(&trace.positions, decision, 40, None, "descent path", &left)?;

    chart_context.draw_series(LineSeries::new(
        trace.positions.outer_iter().map(|row| (row[0], row[1])),
        RED.filled(),
    ))?;

    plot_trace(&trace.values, "objective value", &right)?;

    drawing_area.present()?;

    println!("plot written to {}", args.output);

    Ok(())
}
