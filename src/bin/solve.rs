//! Command-line front end for the solver.
//!
//! ```bash
//! solve expected-score
//! solve best-action --dice 1,1,1,1,1 --open-mask 8191 --upper 0 --rerolls-remaining 2
//! ```

use clap::{Parser, Subcommand};
use yahtzee_solver::{build_solver, Action, BuildOptions, RollCounts, ScoreCategory, State};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("--dice must name exactly five pips in 1..=6, got {0:?}")]
    BadDice(Vec<u8>),
    #[error("--open-mask must fit in 13 bits, got {0}")]
    BadOpenMask(u32),
    #[error("--upper must be at most 63, got {0}")]
    BadUpper(u32),
    #[error("failed to parse {flag}: {source}")]
    Parse {
        flag: &'static str,
        #[source]
        source: std::num::ParseIntError,
    },
}

#[derive(Parser)]
#[command(name = "solve", about = "Exact solver for optimal expected Yahtzee-style score")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Run the DP level-by-level with a single thread instead of rayon.
    #[arg(long, global = true)]
    sequential: bool,

    /// Skip building the roll-outcome tables (`S`/`U`). Queries that need
    /// them will panic.
    #[arg(long, global = true)]
    no_roll_table: bool,

    /// Skip building the reroll tensors (`P`/`w`). Queries that need them
    /// will panic.
    #[arg(long, global = true)]
    no_tensors: bool,

    /// Run the full DP up front instead of lazily on first query.
    #[arg(long, global = true)]
    evaluate: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the expected score of a fresh game under perfect play.
    ExpectedScore,
    /// Print the optimal action after a throw, given the open categories.
    BestAction {
        /// Five comma-separated pips, e.g. 1,1,1,1,1
        #[arg(long)]
        dice: String,
        /// Bitmask of still-open categories (bit i = category code i).
        #[arg(long)]
        open_mask: u32,
        /// Capped upper-section total so far (0..=63).
        #[arg(long, default_value_t = 0)]
        upper: u32,
        /// Rerolls still available after this throw (0, 1, or 2).
        #[arg(long, default_value_t = 2)]
        rerolls_remaining: u8,
    },
}

#[derive(serde::Serialize)]
struct ActionReport {
    action: String,
    detail: String,
}

fn parse_dice(raw: &str) -> Result<RollCounts, CliError> {
    let mut pips = Vec::with_capacity(5);
    for part in raw.split(',') {
        let pip: u8 = part
            .trim()
            .parse()
            .map_err(|source| CliError::Parse { flag: "--dice", source })?;
        pips.push(pip);
    }
    if pips.len() != 5 || pips.iter().any(|&p| !(1..=6).contains(&p)) {
        return Err(CliError::BadDice(pips));
    }
    Ok(RollCounts::from_dice([pips[0], pips[1], pips[2], pips[3], pips[4]]))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yahtzee_solver=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let options = BuildOptions {
        parallel: !cli.sequential,
        build_roll_table: !cli.no_roll_table,
        build_tensors: !cli.no_tensors,
        evaluate: cli.evaluate,
    };
    let solver = build_solver(options);

    match cli.command {
        Commands::ExpectedScore => {
            let score = solver.expected_score();
            println!("{}", serde_json::json!({ "expected_score": score }));
        }
        Commands::BestAction {
            dice,
            open_mask,
            upper,
            rerolls_remaining,
        } => {
            if open_mask > state_full_open_mask() {
                return Err(CliError::BadOpenMask(open_mask).into());
            }
            if upper > 63 {
                return Err(CliError::BadUpper(upper).into());
            }
            let hand = parse_dice(&dice)?;
            let state = State::pack(upper, open_mask);
            let report = match solver.best_action(state, &hand, rerolls_remaining) {
                Action::Score(category) => ActionReport {
                    action: "score".to_string(),
                    detail: format!("{category:?}"),
                },
                Action::Reroll(keep) => ActionReport {
                    action: "reroll".to_string(),
                    detail: format!("{keep:?}"),
                },
            };
            println!("{}", serde_json::to_string(&report)?);
        }
    }
    Ok(())
}

fn state_full_open_mask() -> u32 {
    (1 << ScoreCategory::COUNT) - 1
}
