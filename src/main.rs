//! Interactive prover console
//!
//! One request per line. Lines containing the sequent separator `=>` go
//! to the sequent engine; anything else is parsed as a formula, checked
//! for counterexamples, and on a tautology handed to the Hilbert engine.
//! Every failure is local to its line, the loop keeps accepting input.

use sequitur::hilbert::{self, HilbertConfig, HilbertOutcome};
use sequitur::logic::{Formula, Sequent};
use sequitur::validator::find_counterexample;
use sequitur::{gentzen, parse_formula, parse_sequent};
use std::io::{self, BufRead, Write};
use std::rc::Rc;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let input = line.trim_end();
        if input.is_empty() {
            continue;
        }
        process(input);
    }
    Ok(())
}

fn process(input: &str) {
    if input.contains("=>") {
        match parse_sequent(input) {
            Ok(sequent) => println!("{}", gentzen::prove(sequent)),
            Err(error) => println!("{}", error.caret_diagnostic(input)),
        }
        return;
    }

    let formula = match parse_formula(input) {
        Ok(formula) => formula,
        Err(error) => {
            println!("{}", error.caret_diagnostic(input));
            return;
        }
    };

    match find_counterexample(&formula) {
        Err(error) => println!("{}", error),
        Ok(Some(assignment)) => {
            let interpretation: Vec<String> = assignment
                .iter()
                .map(|(letter, value)| {
                    format!("{} = {}", letter, if *value { "True" } else { "False" })
                })
                .collect();
            println!("Expression is false with interpretation:");
            println!("{}", interpretation.join(", "));
        }
        Ok(None) => run_hilbert(formula),
    }
}

fn run_hilbert(formula: Rc<Formula>) {
    let config = HilbertConfig::default();
    match hilbert::prove(&Sequent::single(formula), &config) {
        Ok(HilbertOutcome::Proof {
            proof,
            elapsed,
            ticks,
        }) => {
            println!("Time: {} ms, steps: {}", elapsed.as_millis(), ticks);
            println!();
            println!("{}", proof);
        }
        Ok(HilbertOutcome::Exhausted { elapsed, ticks }) => {
            println!(
                "Failed to find the proof in {} steps and {} ms",
                config.max_ticks,
                config.timeout.as_millis()
            );
            println!("Time: {} ms, steps: {}", elapsed.as_millis(), ticks);
        }
        Err(error) => println!("{}", error),
    }
}
