//! Command-line driver: read a clause file, search for a refutation and
//! report the result in SZS notation

use clap::{ArgAction, Parser};
use resolute::inference::enable_derivation_output;
use resolute::parser::parse_problem_file;
use resolute::{
    HeuristicKind, LiteralSelection, Proof, ProofState, ProofStatistics, ProofStatus,
    ResoluteError, Result, SearchParams, SimpleProofState,
};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "resolute")]
#[command(about = "Given-clause resolution prover for first-order clause sets")]
#[command(version)]
struct Cli {
    /// Problem file with cnf(...) statements
    file: PathBuf,

    /// Delete tautologies
    #[arg(short = 't', long)]
    delete_tautologies: bool,

    /// Discard given clauses subsumed by processed clauses
    #[arg(short = 'f', long)]
    forward_subsumption: bool,

    /// Remove processed clauses subsumed by the given clause
    #[arg(short = 'b', long)]
    backward_subsumption: bool,

    /// Clause selection heuristic (FIFO, SymbolCount, PickGiven5, PickGiven2)
    #[arg(short = 'H', long)]
    heuristics: Option<HeuristicKind>,

    /// Negative literal selection (first, smallest, largest, leastvars, eqleastvars)
    #[arg(short = 'n', long)]
    literal_selection: Option<LiteralSelection>,

    /// Stop after this many given clauses
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Wall-clock limit in seconds
    #[arg(long)]
    timeout: Option<f64>,

    /// Add equality axioms if the problem uses `=`
    #[arg(short = 'e', long)]
    equality_axioms: bool,

    /// Print the refutation
    #[arg(short = 'p', long)]
    proof: bool,

    /// Use the plain FIFO loop without indexes or redundancy elimination
    #[arg(long)]
    simple: bool,

    /// JSON file with search parameters; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print statistics and proof as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn search_params(&self) -> Result<SearchParams> {
        let mut params = match &self.config {
            Some(path) => SearchParams::from_json(&fs::read_to_string(path)?)?,
            None => SearchParams::default(),
        };
        params.delete_tautologies |= self.delete_tautologies;
        params.forward_subsumption |= self.forward_subsumption;
        params.backward_subsumption |= self.backward_subsumption;
        if let Some(heuristics) = self.heuristics {
            params.heuristics = heuristics;
        }
        if self.literal_selection.is_some() {
            params.literal_selection = self.literal_selection;
        }
        if self.max_iterations.is_some() {
            params.max_iterations = self.max_iterations;
        }
        if let Some(secs) = self.timeout {
            let timeout = Duration::try_from_secs_f64(secs)
                .map_err(|e| ResoluteError::Parse(format!("invalid timeout {}: {}", secs, e)))?;
            params.timeout = Some(timeout);
        }
        Ok(params)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {}", e);
    }
}

struct Outcome {
    status: ProofStatus,
    stats: ProofStatistics,
    proof: Option<Proof>,
}

fn run(cli: &Cli) -> Result<Outcome> {
    let params = cli.search_params()?;
    let mut problem = parse_problem_file(&cli.file)?;
    if cli.equality_axioms {
        problem.clauses.add_eq_axioms()?;
    }

    let outcome = if cli.simple {
        let mut state = SimpleProofState::new(params, problem.clauses)?;
        state.saturate(None);
        Outcome {
            status: state.status(),
            stats: state.statistics().clone(),
            proof: state.proof(),
        }
    } else {
        let mut state = ProofState::new(params, problem.clauses)?;
        state.saturate(None);
        Outcome {
            status: state.status(),
            stats: state.statistics().clone(),
            proof: state.proof(),
        }
    };

    if let Some(expected) = problem.status {
        let found = outcome.status.szs_status();
        if !expected.agrees_with(found) {
            warn!(%expected, %found, "result contradicts the problem status");
        }
    }
    Ok(outcome)
}

fn report(cli: &Cli, outcome: &Outcome) -> Result<()> {
    let name = cli.file.display();
    if cli.json {
        let value = json!({
            "problem": name.to_string(),
            "status": outcome.status.szs_status(),
            "statistics": outcome.stats,
            "proof": outcome.proof,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("# SZS status {} for {}", outcome.status.szs_status(), name);
    println!("{}", outcome.stats);
    if cli.proof {
        if let Some(proof) = &outcome.proof {
            println!("# SZS output start CNFRefutation for {}", name);
            print!("{}", proof);
            println!("# SZS output end CNFRefutation for {}", name);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.proof {
        enable_derivation_output();
    }

    match run(&cli).and_then(|outcome| report(&cli, &outcome)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
