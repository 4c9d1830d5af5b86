use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use stripsched_core::{Instance, SolveOutcome, Solver, SolverConfig, Strategy};

mod bench;
mod render;

#[derive(Parser)]
#[command(name = "stripsched")]
#[command(about = "Exact branch-and-bound solver for the two-dimensional strip packing problem", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one instance
    Solve {
        /// Input instance file (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Allow 90-degree rotation, overriding the instance file's setting
        #[arg(long)]
        rotation: bool,

        /// Ordering strategy to seed the search with
        #[arg(short, long, value_enum, default_value = "all-permutations")]
        strategy: StrategyArg,

        /// Output file for the solved outcome (JSON). Prints to stdout if omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the compare harness across a range of instance sizes
    Bench {
        #[arg(long)]
        n_min: u32,

        #[arg(long)]
        n_max: u32,

        #[arg(long, default_value_t = 10)]
        iterations: u32,

        #[arg(long, default_value_t = 8)]
        strip_width: u32,

        /// Inclusive width range for generated items, "low,high"
        #[arg(long, default_value = "1,4")]
        width_range: String,

        /// Inclusive height range for generated items, "low,high"
        #[arg(long, default_value = "1,9")]
        height_range: String,

        #[arg(long)]
        rotation: bool,

        /// Output results file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Render a solved outcome as SVG
    Render {
        /// Input solved outcome file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Strip width of the rendered instance
        #[arg(long)]
        strip_width: u32,

        /// Output SVG file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum StrategyArg {
    Random,
    Height,
    HeightWidth,
    Width,
    WidthHeight,
    WidthHeightAsc,
    Area,
    AreaHeight,
    AreaWidth,
    AllPermutations,
    Synthetic2,
    Synthetic4,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Strategy {
        match arg {
            StrategyArg::Random => Strategy::Random,
            StrategyArg::Height => Strategy::Height,
            StrategyArg::HeightWidth => Strategy::HeightWidth,
            StrategyArg::Width => Strategy::Width,
            StrategyArg::WidthHeight => Strategy::WidthHeight,
            StrategyArg::WidthHeightAsc => Strategy::WidthHeightAsc,
            StrategyArg::Area => Strategy::Area,
            StrategyArg::AreaHeight => Strategy::AreaHeight,
            StrategyArg::AreaWidth => Strategy::AreaWidth,
            StrategyArg::AllPermutations => Strategy::AllPermutations,
            StrategyArg::Synthetic2 => Strategy::Synthetic2,
            StrategyArg::Synthetic4 => Strategy::Synthetic4,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { input, rotation, strategy, output } => {
            solve_command(input, rotation, strategy.into(), output)?;
        }
        Commands::Bench { n_min, n_max, iterations, strip_width, width_range, height_range, rotation, output } => {
            bench_command(n_min, n_max, iterations, strip_width, &width_range, &height_range, rotation, output)?;
        }
        Commands::Render { input, strip_width, output } => {
            render_command(input, strip_width, output)?;
        }
    }

    Ok(())
}

fn load_instance(path: &PathBuf) -> Result<Instance> {
    let content = std::fs::read_to_string(path)?;
    let is_yaml = matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("yaml") | Some("yml")
    );
    let instance = if is_yaml {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(instance)
}

fn solve_command(
    input: PathBuf,
    force_rotation: bool,
    strategy: Strategy,
    output: Option<PathBuf>,
) -> Result<()> {
    println!("{}", "Loading instance...".bright_blue());
    let mut instance = load_instance(&input)?;
    if force_rotation {
        instance.rotation = true;
    }

    println!(
        "  {} items, strip width {}",
        instance.items.len().to_string().bright_white().bold(),
        instance.strip_width
    );

    println!("{}", "Solving...".bright_blue());
    let solver = Solver::new(SolverConfig::default());
    let outcome = solver.solve_with_strategy(&instance, strategy);

    println!();
    match outcome.best_height {
        Some(height) => println!(
            "{} height {} in {:.5}s",
            "Solved:".bright_green().bold(),
            height.to_string().bright_white().bold(),
            outcome.solve_time.as_secs_f64()
        ),
        None => println!("{}", "No feasible layout found.".bright_red()),
    }

    write_outcome(&outcome, output)
}

fn write_outcome(outcome: &SolveOutcome, output: Option<PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(outcome)?;
    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            println!("Saved result to {}", path.display().to_string().bright_white());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn parse_range(s: &str) -> Result<(u32, u32)> {
    let (low, high) = s
        .split_once(',')
        .ok_or_else(|| anyhow::anyhow!("range must be \"low,high\", got {s:?}"))?;
    let low: u32 = low.trim().parse()?;
    let high: u32 = high.trim().parse()?;
    if low > high {
        anyhow::bail!("range low {low} is greater than high {high}, got {s:?}");
    }
    Ok((low, high))
}

#[allow(clippy::too_many_arguments)]
fn bench_command(
    n_min: u32,
    n_max: u32,
    iterations: u32,
    strip_width: u32,
    width_range: &str,
    height_range: &str,
    rotation: bool,
    output: PathBuf,
) -> Result<()> {
    let config = bench::BenchConfig {
        n_min,
        n_max,
        iterations,
        strip_width,
        width_range: parse_range(width_range)?,
        height_range: parse_range(height_range)?,
        rotation,
    };

    println!(
        "{} n in {}..={}, {} iterations each",
        "Running compare harness:".bright_blue(),
        n_min,
        n_max,
        iterations
    );
    bench::run(&config, &output)?;
    println!(
        "Saved results to {}",
        output.display().to_string().bright_white()
    );
    Ok(())
}

fn render_command(input: PathBuf, strip_width: u32, output: PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(&input)?;
    let outcome: SolveOutcome = serde_json::from_str(&content)?;

    let svg = render::render_svg(&outcome, strip_width)?;
    std::fs::write(&output, svg)?;

    println!(
        "{} Saved SVG to {}",
        "Done.".bright_green(),
        output.display().to_string().bright_white()
    );
    Ok(())
}
