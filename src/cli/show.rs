//! CLI commands for viewing the schedule
//!
//! Mirrors the three views of the plan: paycheck breakdowns, grocery lists,
//! and the year summary.

use clap::Subcommand;

use crate::config::PlanConfig;
use crate::display;
use crate::error::PlannerResult;
use crate::reports::YearSummary;
use crate::schedule::Schedule;

/// Show subcommands
#[derive(Subcommand, Debug)]
pub enum ShowCommands {
    /// Show every paycheck with its expense breakdown
    Paychecks,

    /// Show every period's grocery list
    Grocery,

    /// Show year-aggregate totals
    Summary,

    /// Show all three views
    All,
}

/// Handle show commands
pub fn handle_show_command(config: &PlanConfig, cmd: ShowCommands) -> PlannerResult<()> {
    let schedule = Schedule::build(config);

    match cmd {
        ShowCommands::Paychecks => print_paychecks(&schedule),
        ShowCommands::Grocery => print_grocery(&schedule),
        ShowCommands::Summary => print_summary(config, &schedule),
        ShowCommands::All => {
            print_paychecks(&schedule);
            print_grocery(&schedule);
            print_summary(config, &schedule);
        }
    }

    Ok(())
}

fn print_paychecks(schedule: &Schedule) {
    println!("Paycheck Breakdown");
    println!("==================\n");
    print!("{}", display::format_paycheck_schedule(schedule.periods()));
}

fn print_grocery(schedule: &Schedule) {
    println!("Grocery Lists");
    println!("=============\n");
    print!("{}", display::format_grocery_schedule(schedule.periods()));
}

fn print_summary(config: &PlanConfig, schedule: &Schedule) {
    let summary = YearSummary::generate(schedule, config.target_year);
    print!("{}", display::format_year_summary(&summary));
}
