use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "unitgraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the graph benchmarks and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
    /// Run the test suite with and without the `tracing` feature
    Features,
}

const FEATURE_SETS: &[&[&str]] = &[&["--no-default-features"], &[]];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
        Commands::Features => run_feature_matrix()?,
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running graph benchmarks...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "--bench", "graph_benchmark", "--"]);

    if quick {
        cmd.args(["--measurement-time", "0.1", "--noplot", "--sample-size", "10"]);
    }

    let status = cmd.status().context("Failed to run graph_benchmark")?;
    if !status.success() {
        anyhow::bail!("graph_benchmark exited with {status}");
    }

    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn run_feature_matrix() -> Result<()> {
    for flags in FEATURE_SETS {
        println!("\n>>> cargo test {}", flags.join(" "));
        let status = Command::new("cargo")
            .arg("test")
            .args(*flags)
            .status()
            .with_context(|| format!("Failed to run cargo test {}", flags.join(" ")))?;
        if !status.success() {
            anyhow::bail!("cargo test {} failed", flags.join(" "));
        }
    }
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let mut results: BTreeMap<String, f64> = BTreeMap::new();

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    collect_results(criterion_dir, criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Graph Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Benchmark | Throughput |")?;
    writeln!(file, "|---|---|")?;

    for (name, ops) in &results {
        writeln!(file, "| {} | {} |", name, format_ops(*ops))?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M ops/s", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K ops/s", ops / 1_000.0)
    } else {
        format!("{ops:.0} ops/s")
    }
}

// Criterion writes `<group>/<input>/new/estimates.json` next to
// `<group>/<input>/new/benchmark.json`.
fn collect_results(root: &Path, dir: &Path, results: &mut BTreeMap<String, f64>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if path.file_name().and_then(|s| s.to_str()) == Some("report") {
                continue;
            }
            collect_results(root, &path, results);
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        let Some(run_dir) = path.parent() else {
            continue;
        };
        if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(bench_dir) = run_dir.parent() else {
            continue;
        };
        let name = bench_dir
            .strip_prefix(root)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| bench_dir.display().to_string());

        let elements = read_json(&run_dir.join("benchmark.json"))
            .and_then(|json| json.get("throughput")?.get("Elements")?.as_f64());
        let mean_ns = read_json(&path)
            .and_then(|json| json.get("mean")?.get("point_estimate")?.as_f64());

        if let Some(time_ns) = mean_ns.filter(|t| *t > 0.0) {
            let metric = elements.unwrap_or(1.0) * 1e9 / time_ns;
            results.insert(name, metric);
        }
    }
}

fn read_json(path: &Path) -> Option<serde_json::Value> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}
