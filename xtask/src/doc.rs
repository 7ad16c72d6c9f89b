use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

/// Crate and the host feature set its API is documented with, so the
/// cfg-gated derives and the mocks show up.
const CRATES: &[(&str, &str)] = &[("platform", "std,serde"), ("components", "tracing,serde")];

pub fn run(open: bool) -> Result<()> {
    println!();
    println!("{}", "📚 Building documentation...".cyan().bold());
    println!();

    let start = Instant::now();

    for (index, &(krate, features)) in CRATES.iter().enumerate() {
        let mut cmd = Command::new("cargo");
        cmd.args(["doc", "--no-deps", "-p", krate, "--features", features]);
        // Only the last crate opens, after every page exists.
        if open && index.saturating_add(1) == CRATES.len() {
            cmd.arg("--open");
        }

        let output = cmd
            .output()
            .with_context(|| format!("Failed to document {krate}"))?;
        if !output.status.success() {
            eprintln!("{}", format!("  ✗ {krate} [{features}]").red().bold());
            eprintln!();
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
            anyhow::bail!("Documentation build failed for {krate}");
        }
        println!("{}", format!("  ✓ {krate} [{features}]").green());
    }

    println!();
    println!(
        "{}",
        format!(
            "✓ Documentation built in {:.2}s",
            start.elapsed().as_secs_f64()
        )
        .green()
    );

    if !open {
        println!();
        for (krate, _) in CRATES {
            println!("   {}", format!("target/doc/{krate}/index.html").dimmed());
        }
        println!(
            "   {}",
            "Or run 'cargo run -p xtask -- doc --open'".dimmed()
        );
    }

    println!();

    Ok(())
}
