//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - single-qubit basis measurement simulator",
        style("qbasis").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qbasis-ir           Gate library and circuit programs");
    println!("  qbasis-adapter-sim  Statevector sampler");
    println!("  qbasis-runner       Experiments, suites and reports");
    println!("  qbasis-cli          Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
