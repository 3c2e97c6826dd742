use qho::{ density, grid::Grid, peaks, utils };

// evaluate the probability density for each displayable energy level

fn main() {
    const TARGET_N: i64 = 5; // level to report in detail

    // canonical display grid: 1000 points over [-5, 5]
    let grid = Grid::default();
    let dx = grid.get_dx();

    // full eigenstate record for the target level
    let state = density::eigenstate(TARGET_N, &grid).unwrap();
    let d = state.density();
    println!("n = {}", state.n);
    println!("e = {} ħω", state.e);
    println!("norm = {:.9}", utils::trapz(&d, dx));

    // level sweep: the level-n density carries n + 1 maxima
    for n in 0..=10 {
        let density = grid.evaluate(n).unwrap();
        let pks
            = peaks::find_peaks(grid.get_x(), &density, peaks::DEF_THRESHOLD)
            .unwrap();
        println!(
            "n = {:2}: {:2} peaks, norm = {:.6}",
            n, pks.len(), utils::trapz(&density, dx),
        );
    }
}
