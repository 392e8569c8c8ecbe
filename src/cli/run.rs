//! Compiles the premises given to the binary, and writes what they entail.

use std::io::Write;

use ergo_lib::context::Context;

use crate::{config::CliConfig, render};

/// The exit status when all went well.
pub const SUCCESS: i32 = 0;

/// The exit status when some premise was invalid, or no premise was valid.
pub const FAILURE: i32 = 1;

/// Compiles each premise of the config and writes a report.
///
/// The report is written to `out`, and syntax errors to `err`.
/// Returns the exit status of the run.
///
/// Without `skip_invalid`, the run stops at the first invalid premise and nothing is written to `out`.
pub fn run(
    config: &CliConfig,
    program: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<i32> {
    let mut the_context = Context::default();
    let mut failures = 0;

    for (index, formula) in config.premises.iter().enumerate() {
        if let Err(e) = the_context.add_premise(formula) {
            let message = render::syntax_error(program, index + 1, &e, config.colour);
            writeln!(err, "{message}")?;
            failures += 1;

            if !config.skip_invalid {
                return Ok(FAILURE);
            }
        }
    }

    if the_context.premises().is_empty() {
        writeln!(err, "{program}: No valid premises ({failures} invalid)")?;
        return Ok(FAILURE);
    }

    let entailment = the_context.entail();

    if config.print_compiled {
        writeln!(out, "{}", render::compiled_premises(the_context.premises()))?;
    }

    if config.show_models {
        writeln!(out, "{}", render::models(the_context.models()))?;
    }

    match config.plain_text {
        true => writeln!(out, "{}", render::plain_text(&entailment))?,
        false => {
            if config.print_compiled {
                writeln!(out, "Implications:")?;
            }
            writeln!(out, "{}", render::table(&entailment, config.colour))?;
        }
    }

    Ok(SUCCESS)
}
