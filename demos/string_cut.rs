//! Example: cheapest order of cutting a line of 20 at 3, 10, 12 and 15.
//!
//! Run with:
//! `cargo run --example string_cut`

use dp_tables::{problems::cut::CutProblem, TableEngineBuilder};

fn main() {
    let problem = match CutProblem::new(20, &[3, 10, 12, 15]) {
        Ok(problem) => problem,
        Err(err) => {
            eprintln!("string_cut: {err}");
            std::process::exit(2);
        }
    };
    println!("C {:?}", problem.boundaries());

    let solution = TableEngineBuilder::new(problem)
        .with_snapshots(true)
        .build()
        .solve();

    for snap in &solution.snapshots {
        println!("span {}", snap.layer + 2);
        println!("{}", snap.table);
    }
    println!("answer {}", solution.cost);

    println!("Cut order:");
    for step in &solution.path {
        println!(
            "  cut at {} inside [{}, {}] (cost {})",
            step.position, step.segment.0, step.segment.1, step.cost
        );
    }
}
