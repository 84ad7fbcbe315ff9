use std::fmt::Display;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use dp_tables::dag::{DependencyGraph, DpDag};
use dp_tables::problems::{
    common_substring::CommonSubstringProblem, cut::CutProblem,
    edit_distance::EditDistanceProblem, interval_lps::IntervalPalindromeProblem,
    lcs::LcsProblem, matrix_chain::MatrixChainProblem,
};
use dp_tables::utils::reversed;
use dp_tables::{DpTable, Snapshot, Solution, TableEngineBuilder};

/// Walk through the worked dynamic-programming examples, printing each table.
#[derive(Parser, Debug)]
#[command(name = "dp-walkthrough", version, about)]
struct Cli {
    /// Print the table after every layer (row or span length).
    #[arg(long, global = true)]
    snapshots: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Also emit the dependency graph of the table.
    #[arg(long, global = true)]
    dag: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// The three worked examples: palindrome of "agca", "bans" vs "banana",
    /// and cutting a line of 20 at 3, 10, 12, 15.
    Demo,
    /// Longest common subsequence of two strings.
    Lcs { x: String, y: String },
    /// Longest palindromic subsequence, as LCS against the reversed string.
    Lps { sequence: String },
    /// Longest common substring of two strings.
    Substring { x: String, y: String },
    /// Minimum total cost of cutting a line at every given position.
    Cut {
        #[arg(long)]
        length: usize,
        /// Comma-separated cut positions, in any order.
        #[arg(long, value_delimiter = ',')]
        cuts: Vec<usize>,
    },
    /// Levenshtein distance between two strings.
    Edit { x: String, y: String },
    /// Cheapest matrix-chain parenthesization for comma-separated dimensions.
    Chain {
        #[arg(value_delimiter = ',', required = true)]
        dims: Vec<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = Options {
        snapshots: cli.snapshots,
        format: cli.format,
        dag: cli.dag,
    };

    match cli.command {
        Command::Demo => {
            run_lps(&opts, "agca")?;
            run_substring(&opts, "bans", "banana")?;
            run_cut(&opts, 20, &[3, 10, 12, 15])?;
        }
        Command::Lcs { x, y } => {
            let (x, y) = (chars(&x), chars(&y));
            let problem = LcsProblem::new(&x, &y);
            let solution = solve(&problem, &opts);
            let witness: String = problem.subsequence(&solution.path).into_iter().collect();
            emit(&opts, &report(&opts, "lcs", &problem, &solution, witness))?;
        }
        Command::Lps { sequence } => run_lps(&opts, &sequence)?,
        Command::Substring { x, y } => run_substring(&opts, &x, &y)?,
        Command::Cut { length, cuts } => run_cut(&opts, length, &cuts)?,
        Command::Edit { x, y } => {
            let (x, y) = (chars(&x), chars(&y));
            let problem = EditDistanceProblem::new(&x, &y);
            let solution = solve(&problem, &opts);
            let script = problem
                .operations(&solution.path)
                .iter()
                .map(|op| format!("{op:?}"))
                .collect::<Vec<_>>()
                .join(", ");
            emit(&opts, &report(&opts, "edit_distance", &problem, &solution, script))?;
        }
        Command::Chain { dims } => {
            let problem = MatrixChainProblem::new(dims).context("invalid matrix chain")?;
            let solution = solve(&problem, &opts);
            let witness = problem.parenthesization(&solution.path);
            emit(&opts, &report(&opts, "matrix_chain", &problem, &solution, witness))?;
        }
    }

    Ok(())
}

struct Options {
    snapshots: bool,
    format: OutputFormat,
    dag: bool,
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn solve<P>(problem: &P, opts: &Options) -> Solution<P>
where
    P: DependencyGraph + Clone,
{
    TableEngineBuilder::new(problem.clone())
        .with_snapshots(opts.snapshots)
        .build()
        .solve()
}

fn run_lps(opts: &Options, sequence: &str) -> Result<()> {
    let x = chars(sequence);
    let y = reversed(&x);
    let problem = LcsProblem::new(&x, &y);
    let solution = solve(&problem, opts);

    // The LCS witness need not be a palindrome; the interval form gives one.
    let interval = IntervalPalindromeProblem::new(&x);
    let palindrome: String = {
        let path = TableEngineBuilder::new(interval.clone()).build().run().1;
        interval.palindrome(&path).into_iter().collect()
    };
    let name = "longest_palindromic_subsequence";
    emit(opts, &report(opts, name, &problem, &solution, palindrome))
}

fn run_substring(opts: &Options, x: &str, y: &str) -> Result<()> {
    let (x, y) = (chars(x), chars(y));
    let problem = CommonSubstringProblem::new(&x, &y);
    let solution = solve(&problem, opts);
    let witness: String = problem.substring(&solution.path).iter().collect();
    emit(opts, &report(opts, "longest_common_substring", &problem, &solution, witness))
}

fn run_cut(opts: &Options, length: usize, cuts: &[usize]) -> Result<()> {
    let problem = CutProblem::new(length, cuts)
        .with_context(|| format!("invalid cuts {cuts:?} for length {length}"))?;
    let solution = solve(&problem, opts);
    let plan = solution
        .path
        .iter()
        .map(|s| {
            format!(
                "cut {} in [{}, {}] costs {}",
                s.position, s.segment.0, s.segment.1, s.cost
            )
        })
        .collect::<Vec<_>>()
        .join("; ");
    let report = Report {
        boundaries: Some(problem.boundaries().to_vec()),
        ..report(opts, "min_cut_cost", &problem, &solution, plan)
    };
    emit(opts, &report)
}

#[derive(Serialize)]
struct Report<'a, C> {
    problem: &'a str,
    answer: C,
    witness: String,
    /// Cut boundary list `C`, only for the cut problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    boundaries: Option<Vec<usize>>,
    before: DpTable<C>,
    after: &'a DpTable<C>,
    #[serde(skip_serializing_if = "no_snapshots")]
    snapshots: &'a [Snapshot<C>],
    #[serde(skip_serializing_if = "Option::is_none")]
    dag: Option<DpDag<C>>,
}

fn no_snapshots<C>(snapshots: &&[Snapshot<C>]) -> bool {
    snapshots.is_empty()
}

fn report<'a, P>(
    opts: &Options,
    name: &'a str,
    problem: &P,
    solution: &'a Solution<P>,
    witness: String,
) -> Report<'a, P::Cost>
where
    P: DependencyGraph,
{
    Report {
        problem: name,
        answer: solution.cost,
        witness,
        boundaries: None,
        before: problem.init_table(),
        after: &solution.table,
        snapshots: &solution.snapshots,
        dag: opts.dag.then(|| DpDag::build(problem, solution)),
    }
}

fn emit<C>(opts: &Options, report: &Report<'_, C>) -> Result<()>
where
    C: Display + Serialize,
{
    match opts.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).context("serialising report")?;
            println!("{json}");
        }
        OutputFormat::Text => {
            println!("== {}", report.problem);
            if let Some(boundaries) = &report.boundaries {
                println!("C {boundaries:?}");
            }
            println!("before");
            println!("{}", report.before);
            for snap in report.snapshots {
                println!("layer {}", snap.layer);
                println!("{}", snap.table);
            }
            println!("after");
            println!("{}", report.after);
            println!("answer: {}", report.answer);
            if !report.witness.is_empty() {
                println!("witness: {}", report.witness);
            }
            if let Some(dag) = &report.dag {
                let json = serde_json::to_string(dag).context("serialising dependency graph")?;
                println!("dag: {json}");
            }
            println!();
        }
    }
    Ok(())
}
