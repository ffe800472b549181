//! Console demo: solve one staffing horizon and print the plan.
//!
//! Run with: cargo run

use care_staffing::{dto, extract, model::StaffingModel, solver, SolveStatus};

fn main() {
    env_logger::init();

    let month = "January";
    let num_days = 28;
    let model = StaffingModel::build(month, 2025, num_days, None);

    let solved = match solver::solve(model) {
        Ok(solved) => solved,
        Err(err) => {
            eprintln!("solve failed: {err}");
            std::process::exit(1);
        }
    };

    println!("Optimization status: {}", solved.status);
    if solved.status != SolveStatus::Optimal {
        std::process::exit(1);
    }

    let result = match extract::extract(&solved) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("extraction failed: {err}");
            std::process::exit(1);
        }
    };

    println!("\nTotal cost: {:.2}", result.total_cost);

    println!("\nStaff changes:");
    for row in dto::staff_summary(&result) {
        println!(
            "  {:<14} hired: {:>3}  fired: {:>3}  total: {:>3}",
            row.category, row.hired, row.fired, row.total
        );
    }

    let costs = dto::cost_breakdown(&result);
    println!("\nCost breakdown:");
    println!("  regular wages: {:>12.2}", costs.regular_cost);
    println!("  overtime:      {:>12.2}", costs.overtime_cost);
    println!("  hiring:        {:>12.2}", costs.hiring_cost);
    println!("  firing:        {:>12.2}", costs.firing_cost);

    println!("\nSchedule ({month}, {} days):", result.num_days());
    println!(
        "  {:<4} {:<8} {:<14} {:>7} {:>8} {:>6}",
        "Day", "Shift", "Category", "Regular", "Overtime", "Total"
    );
    for row in dto::schedule_rows(&result) {
        println!(
            "  {:<4} {:<8} {:<14} {:>7} {:>8} {:>6}",
            row.day, row.shift, row.category, row.regular, row.overtime, row.total
        );
    }
}
