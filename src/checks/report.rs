//! Result accumulation for the verification suites.
//!
//! Every check runs to completion regardless of earlier failures; the
//! summary table and the process exit code are derived afterwards.

use anyhow::Result;

const RULE_WIDTH: usize = 60;

/// Print a section banner in the suite output.
pub fn banner(title: &str) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
}

#[derive(Debug)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
    /// Diagnostic text for checks that errored rather than merely failing.
    pub detail: Option<String>,
}

#[derive(Debug, Default)]
pub struct CheckReport {
    outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a check result. An `Err` counts as a failure: the error chain
    /// is printed and the run continues with the next check.
    pub fn record(&mut self, name: &'static str, result: Result<bool>) {
        let (passed, detail) = match result {
            Ok(passed) => (passed, None),
            Err(err) => {
                println!("❌ Check errored: {err:#}");
                (false, Some(format!("{err:#}")))
            }
        };
        self.outcomes.push(CheckOutcome {
            name,
            passed,
            detail,
        });
    }

    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    pub fn print_summary(&self) {
        println!();
        banner("Check summary");
        for outcome in &self.outcomes {
            let status = if outcome.passed { "✅ PASS" } else { "❌ FAIL" };
            match &outcome.detail {
                Some(detail) => println!("{status} - {} ({detail})", outcome.name),
                None => println!("{status} - {}", outcome.name),
            }
        }
        println!("{}", "-".repeat(RULE_WIDTH));
        println!(
            "Total: {} | Passed: {} | Failed: {}",
            self.outcomes.len(),
            self.passed(),
            self.failed()
        );
        println!("{}", "-".repeat(RULE_WIDTH));
    }
}
