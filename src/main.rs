use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use paycheck_planner::cli::{
    handle_export_command, handle_show_command, ExportCommands, ShowCommands,
};
use paycheck_planner::config::{PlanConfig, PlannerPaths};
use paycheck_planner::models::read_template_file;

#[derive(Parser)]
#[command(
    name = "paycheck",
    version,
    about = "Biweekly paycheck budgeting and grocery planning",
    long_about = "paycheck-planner computes a biweekly household budget schedule \
                  and a recurring grocery list from a fixed plan: income, start \
                  payday, per-half expense sets, and a grocery template."
)]
struct Cli {
    /// Path to a plan configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the start payday (YYYY-MM-DD)
    #[arg(long, global = true)]
    start: Option<String>,

    /// Override the target year
    #[arg(long, global = true)]
    year: Option<i32>,

    /// Override the monthly income (e.g. "4100" or "4100.00")
    #[arg(long, global = true)]
    income: Option<String>,

    /// Load the grocery template from a CSV file
    #[arg(long, global = true)]
    template: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// View the schedule
    #[command(subcommand)]
    Show(ShowCommands),

    /// Export the schedule
    #[command(subcommand)]
    Export(ExportCommands),

    /// Save the current plan as the default configuration
    Init,

    /// Show the effective plan configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PlannerPaths::new()?;
    let mut config = match &cli.config {
        Some(path) => PlanConfig::load_from_path(path)?,
        None => PlanConfig::load_or_create(&paths)?,
    };

    config.apply_overrides(cli.start.as_deref(), cli.year, cli.income.as_deref())?;

    if let Some(template_path) = &cli.template {
        config.grocery_template = read_template_file(template_path)?;
    }

    match cli.command {
        Some(Commands::Show(cmd)) => {
            handle_show_command(&config, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&config, cmd)?;
        }
        Some(Commands::Init) => {
            config.save(&paths)?;
            println!("Plan saved to: {}", paths.plan_file().display());
        }
        Some(Commands::Config) => {
            println!("paycheck-planner Configuration");
            println!("==============================");
            println!("Plan file:       {}", paths.plan_file().display());
            println!("Initialized:     {}", paths.is_initialized());
            println!();
            println!("Monthly income:  {}", config.monthly_income);
            println!("Pay per check:   {}", config.pay_per_check());
            println!("Start payday:    {}", config.start_payday);
            println!("Target year:     {}", config.target_year);
            println!();
            println!("First-half expenses:");
            for rule in &config.first_half_expenses {
                println!("  {:24} {}", rule.name, rule.amount);
            }
            println!("Second-half expenses:");
            for rule in &config.second_half_expenses {
                println!("  {:24} {}", rule.name, rule.amount);
            }
            println!();
            println!("Grocery template: {} items", config.grocery_template.len());
        }
        None => {
            println!("paycheck-planner - Biweekly budgeting and grocery planning");
            println!();
            println!("Run 'paycheck --help' for usage information.");
            println!("Run 'paycheck show summary' for the year totals.");
        }
    }

    Ok(())
}
