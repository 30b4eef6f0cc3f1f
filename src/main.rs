mod colors;
mod error;
mod report;
mod roster;
mod selector;
mod settings;

use std::path::PathBuf;

use clap::Parser;

use crate::{
    error::UnwrapOrExplode,
    report::Selection,
    roster::Roster,
    selector::Selector,
    settings::{Settings, DEFAULT_ROSTER_PATH, MAX_NAME_LENGTH, REPRESENTATIVES, TOTAL_STUDENTS},
};

/// Picks class representatives at random from a list of students.
#[derive(Parser)]
#[command(version)]
struct CliArgs {
    /// File with one student name per line.
    #[arg(default_value = DEFAULT_ROSTER_PATH)]
    file: PathBuf,
    /// How many names the file must contain.
    #[arg(long, default_value_t = TOTAL_STUDENTS)]
    total: usize,
    /// How many representatives to pick.
    #[arg(long, default_value_t = REPRESENTATIVES)]
    pick: usize,
    /// Names must be shorter than this many characters.
    #[arg(long, default_value_t = MAX_NAME_LENGTH)]
    max_name_length: usize,
    /// Fixed seed, for replaying a previous draw.
    #[arg(long)]
    seed: Option<u64>,
    /// Print diagnostics to STDERR.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = CliArgs::parse();

    let settings = Settings::default()
        .roster_path(args.file)
        .total(args.total)
        .representatives(args.pick)
        .max_name_length(args.max_name_length)
        .validate()
        .unwrap_or_explode();

    let roster = Roster::load(&settings.roster_path, settings.limits).unwrap_or_explode();
    if args.verbose {
        noteln!("Loaded {} names from {}", roster.len(), settings.roster_path.display());
    }

    let (mut selector, seed) = match args.seed {
        Some(seed) => (Selector::seeded(seed), seed),
        None => Selector::time_seeded(),
    };
    if args.verbose {
        noteln!("Seed: {seed}");
    }

    let indices = selector
        .pick(roster.len(), settings.representatives)
        .unwrap_or_explode();

    show!(Selection::new(&roster, &indices));
}
