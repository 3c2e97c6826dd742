use std::path::{ Path, PathBuf };
use anyhow::Result;
use ndarray as nd;
use plotters::prelude::*;
use structopt::StructOpt;
use qho::{
    density::eigenstate,
    grid::Grid,
    peaks::{ find_peaks, DEF_THRESHOLD },
    utils::trapz,
};

// selection range for the energy level control
const N_MIN: i64 = 0;
const N_MAX: i64 = 10;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "qho-viz",
    about = "Render quantum harmonic oscillator probability densities"
)]
struct Opt {
    /// Energy level to render
    #[structopt(default_value = "0")]
    n: i64,
    /// Output SVG path
    #[structopt(short, long, parse(from_os_str), default_value = "qho.svg")]
    out: PathBuf,
    /// Render every level from 0 through 10 on a single chart instead
    #[structopt(short, long)]
    all: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    if opt.all {
        render_family(&opt.out)
    } else {
        let n = opt.n.clamp(N_MIN, N_MAX);
        if n != opt.n {
            log::warn!(
                "requested level {} clamped into [{}, {}]",
                opt.n, N_MIN, N_MAX,
            );
        }
        render_level(n, &opt.out)
    }
}

fn render_level(n: i64, out: &Path) -> Result<()> {
    let grid = Grid::default();
    let state = eigenstate(n, &grid)?;
    let density = state.density();
    let peaks = find_peaks(grid.get_x(), &density, DEF_THRESHOLD)?;
    log::info!(
        "rendering n = {} (e = {} ħω, norm = {:.6}) to {}",
        state.n, state.e, trapz(&density, grid.get_dx()), out.display(),
    );
    plot_densities(&[(state.n, density)], &grid, out)?;
    describe(state.n, peaks.len());
    Ok(())
}

fn render_family(out: &Path) -> Result<()> {
    let grid = Grid::default();
    let curves: Vec<(usize, nd::Array1<f64>)>
        = (N_MIN..=N_MAX)
        .map(|n| eigenstate(n, &grid).map(|state| (state.n, state.density())))
        .collect::<Result<_, _>>()?;
    log::info!("rendering n = {}..={} to {}", N_MIN, N_MAX, out.display());
    plot_densities(&curves, &grid, out)?;
    for (n, density) in curves.iter() {
        let peaks = find_peaks(grid.get_x(), density, DEF_THRESHOLD)?;
        println!("n = {:2}: {:2} peaks", n, peaks.len());
    }
    Ok(())
}

fn plot_densities(
    curves: &[(usize, nd::Array1<f64>)],
    grid: &Grid,
    out: &Path,
) -> Result<()> {
    let x = grid.get_x();
    let ymax: f64
        = curves.iter()
        .flat_map(|(_, density)| density.iter())
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);

    let plot = SVGBackend::new(out, (768, 512)).into_drawing_area();
    plot.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&plot)
        .caption(
            "Quantum Harmonic Oscillator Probability Density",
            ("sans-serif", 22),
        )
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .margin(10)
        .build_cartesian_2d(x[0]..x[x.len() - 1], 0.0..ymax * 1.05)?;
    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("|ψ(x)|²")
        .draw()?;

    let mut colors = colorous::TABLEAU10.iter().cycle();
    for (n, density) in curves.iter() {
        let color = colors.next().unwrap();
        let rgb = RGBColor(color.r, color.g, color.b);
        chart
            .draw_series(LineSeries::new(
                x.iter().zip(density.iter()).map(|(&xk, &dk)| (xk, dk)),
                &rgb,
            ))?
            .label(format!("n = {}", n))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], &rgb)
            });
    }
    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;
    Ok(())
}

// explanation text accompanying the figure
fn describe(n: usize, peak_count: usize) {
    println!(
        "For n = {}, there are {} peaks in the probability density.",
        n, peak_count,
    );
    println!(
        "Higher energy levels have more oscillations, representing more \
        possible locations for the particle. This reflects how quantum \
        energy levels increase discretely rather than continuously."
    );
}
