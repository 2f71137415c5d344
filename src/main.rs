use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io::{self, IsTerminal, Write};

use traffic_flow_sim::keys::{InputKeys, TerminalKeys};
use traffic_flow_sim::menu::{run_menu, MenuOptions};
use traffic_flow_sim::simulation::{Scenario, SimRng};

#[derive(Parser)]
#[command(name = "traffic_flow_sim")]
#[command(about = "Monte Carlo traffic flow toy with an interactive menu")]
struct Cli {
    /// Seed the random generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Run a single scenario once and exit instead of showing the menu
    #[arg(long, value_enum)]
    scenario: Option<Scenario>,

    /// Do not clear the screen before each menu display
    #[arg(long)]
    no_clear: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            SimRng::new_with_seed(seed)
        }
        None => SimRng::new(),
    };

    match cli.scenario {
        Some(scenario) => run_headless(scenario, &mut rng),
        None => {
            let options = MenuOptions {
                clear_screen: !cli.no_clear,
            };
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut input = stdin.lock();
            let mut output = stdout.lock();
            if stdin.is_terminal() {
                run_menu(&mut input, &mut output, &mut rng, &mut TerminalKeys, &options)
            } else {
                info!("Input is not a terminal, reading keys from the stream");
                run_menu(&mut input, &mut output, &mut rng, &mut InputKeys, &options)
            }
        }
    }
}

/// Run one scenario without the menu (no prompts, no pauses)
fn run_headless(scenario: Scenario, rng: &mut SimRng) -> Result<()> {
    info!("Running {} in headless mode", scenario.title());
    let report = scenario.run(rng);

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", report)?;
    stdout.flush().context("Failed to flush output")?;
    Ok(())
}
