//! The compare harness: for each instance size in a configured range, solves
//! `iterations` randomly generated instances under a fixed strategy subset
//! and writes one summary row per size to a results file, whitespace
//! separated, heights and times summed over the iteration count.

use anyhow::Result;
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;
use std::time::Instant;
use stripsched_core::bounds::{continuous_bound, first_bound};
use stripsched_core::generator::Generator;
use stripsched_core::{Solver, SolverConfig, Strategy};

pub struct BenchConfig {
    pub n_min: u32,
    pub n_max: u32,
    pub iterations: u32,
    pub strip_width: u32,
    pub width_range: (u32, u32),
    pub height_range: (u32, u32),
    pub rotation: bool,
}

/// One row's accumulated sums, column order fixed by the results format.
#[derive(Default)]
struct RowSums {
    con_bound: u64,
    first_bound: u64,
    exact_h: u64,
    exact_t: f64,
    hw_h: u64,
    hw_t: f64,
    wh_h: u64,
    wh_t: f64,
    ah_h: u64,
    ah_t: f64,
    aw_h: u64,
    aw_t: f64,
    random_h: u64,
    random_t: f64,
    syn_h: u64,
    syn_t: f64,
    syn1_h: u64,
    syn1_t: f64,
}

/// Runs the harness over `config.n_min..=config.n_max` and writes the
/// results file to `output`.
pub fn run(config: &BenchConfig, output: &Path) -> Result<()> {
    let mut rng = rand::rng();
    let solver = Solver::new(SolverConfig::default());
    let mut file = std::fs::File::create(output)?;

    writeln!(
        file,
        "n con_bound first_bound exact_h exact_t HW_h HW_t WH_h WH_t AH_h AH_t AW_h AW_t random_h random_t syn_h syn_t syn1_h syn1_t"
    )?;

    for n in config.n_min..=config.n_max {
        let mut sums = RowSums::default();

        for _ in 0..config.iterations {
            let instance = Generator::uniform(
                &mut rng,
                n,
                config.strip_width,
                config.width_range,
                config.height_range,
                config.rotation,
            )?;

            sums.con_bound += continuous_bound(&instance)?;
            sums.first_bound += first_bound(&instance)?;

            log::debug!("bench n={n}: instance generated with {} items", instance.items.len());

            accumulate(&solver, &instance, Strategy::AllPermutations, &mut sums.exact_h, &mut sums.exact_t);
            accumulate(&solver, &instance, Strategy::HeightWidth, &mut sums.hw_h, &mut sums.hw_t);
            accumulate(&solver, &instance, Strategy::WidthHeight, &mut sums.wh_h, &mut sums.wh_t);
            accumulate(&solver, &instance, Strategy::AreaHeight, &mut sums.ah_h, &mut sums.ah_t);
            accumulate(&solver, &instance, Strategy::AreaWidth, &mut sums.aw_h, &mut sums.aw_t);
            accumulate(&solver, &instance, Strategy::Random, &mut sums.random_h, &mut sums.random_t);
            accumulate(&solver, &instance, Strategy::Synthetic4, &mut sums.syn_h, &mut sums.syn_t);
            accumulate(&solver, &instance, Strategy::Synthetic2, &mut sums.syn1_h, &mut sums.syn1_t);
        }

        writeln!(file, "{}", format_row(n, &sums))?;
        log::info!("bench n={n} done ({} iterations)", config.iterations);
    }

    Ok(())
}

fn accumulate(solver: &Solver, instance: &stripsched_core::Instance, strategy: Strategy, h_sum: &mut u64, t_sum: &mut f64) {
    let start = Instant::now();
    let outcome = solver.solve_with_strategy(instance, strategy);
    *t_sum += start.elapsed().as_secs_f64();
    *h_sum += outcome.best_height.unwrap_or(0);
}

fn format_row(n: u32, s: &RowSums) -> String {
    let mut row = String::new();
    write!(
        row,
        "{n} {} {} {} {:.5} {} {:.5} {} {:.5} {} {:.5} {} {:.5} {} {:.5} {} {:.5} {} {:.5}",
        s.con_bound,
        s.first_bound,
        s.exact_h,
        s.exact_t,
        s.hw_h,
        s.hw_t,
        s.wh_h,
        s.wh_t,
        s.ah_h,
        s.ah_t,
        s.aw_h,
        s.aw_t,
        s.random_h,
        s.random_t,
        s.syn_h,
        s.syn_t,
        s.syn1_h,
        s.syn1_t,
    )
    .unwrap();
    row
}
