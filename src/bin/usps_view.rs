use clap::Parser;

use plotters::prelude::*;

use arftools::datasets::load_usps;
use arftools::plots::show_image;
use arftools::progress::print_percent;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long)]
    path: String,

    #[clap(short, long, default_value_t = 16)]
    count: usize,

    #[clap(short, long, default_value = "plots/usps_digits.png")]
    output: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let (data, labels) = load_usps::<f64, _>(&args.path)?;

    println!("{} examples, {} features", data.nrows(), data.ncols());

    let count = args.count.min(data.nrows());
    let side = (count as f64).sqrt().ceil() as usize;

    if let Some(parent) = std::path::Path::new(&args.output).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let drawing_area = BitMapBackend::new(&args.output, (1024, 1024)).into_drawing_area();
    drawing_area.fill(&WHITE)?;

    let cells = drawing_area.split_evenly((side, side));

    for (i, cell) in cells.iter().take(count).enumerate() {
        show_image(data.row(i), cell)?;
        print_percent(i, count);
    }

    println!();

    drawing_area.present()?;

    let shown: Vec<i64> = labels.iter().take(count).copied().collect();
    println!("labels shown: {:?}", shown);
    println!("image grid written to {}", args.output);

    Ok(())
}
