use stencil1d::box_filter::BoxFilter;
use stencil1d::stencil;
use stencil1d::stencil::standard_reducers;

use clap::Parser;

/// stencil1d 1D windowed reduction demo
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Window width for the moving-average pass.
    #[arg(short, long, default_value = "3")]
    pub width: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let data = vec![2.0, 5.0, -10.0, -7.0, -7.0, -3.0, -1.0, 9.0, 8.0, -6.0];

    let mov_avg = standard_reducers::mean(args.width);
    println!("{:?}", stencil::apply(&data, &mov_avg, args.width));

    let sum_sq = standard_reducers::sum_of_squares();
    println!("{:?}", stencil::apply(&data, &sum_sq, 5));

    // A uniform box is a moving average
    let box_f1 = BoxFilter::uniform(3);
    println!("{:?}", stencil::apply(&data, &box_f1, box_f1.width()));

    let box_f2 = BoxFilter::new(vec![-0.5, 0.0, 0.0, 0.5]);
    println!("{:?}", stencil::apply(&data, &box_f2, box_f2.width()));
}
