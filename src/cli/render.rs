use crossterm::style::{Color, Stylize};

use ergo_lib::{
    reports::{Entailment, Verdict},
    structures::{atom::Atom, premise::Premise, valuation::Assignment},
    types::err::SyntaxError,
};

fn verdict_colour(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Vacuous => Color::Magenta,
        Verdict::ProvenTrue => Color::Green,
        Verdict::ProvenFalse => Color::Red,
        Verdict::Unproven => Color::Yellow,
    }
}

fn mark(verdict: Verdict, colour: bool) -> String {
    match colour {
        true => format!("{}", verdict.mark().to_string().with(verdict_colour(verdict))),
        false => verdict.mark().to_string(),
    }
}

/// The symbolic table of verdicts, e.g. ` a [✓]\tb [?]\tc [?]\td [?]`.
pub fn table(entailment: &Entailment, colour: bool) -> String {
    let entries = entailment
        .iter()
        .map(|(atom, verdict)| format!("{atom} [{}]", mark(verdict, colour)))
        .collect::<Vec<_>>();
    format!(" {}", entries.join("\t"))
}

fn atom_list(atoms: impl Iterator<Item = Atom>) -> String {
    let list = atoms.map(|atom| atom.to_string()).collect::<Vec<_>>();
    match list.is_empty() {
        true => "(none)".to_string(),
        false => list.join(", "),
    }
}

/// The verdicts as lists of proven and disproven atoms.
pub fn plain_text(entailment: &Entailment) -> String {
    let mut proven = atom_list(entailment.proven());
    if entailment.is_vacuous() {
        proven.push_str(", vacuously");
    }
    let disproven = atom_list(entailment.disproven());
    format!("Proven: {proven}\nDisproven: {disproven}")
}

/// Each premise on a numbered line.
pub fn compiled_premises(premises: &[Premise]) -> String {
    let mut lines = vec!["Compiled premises:".to_string()];
    for (index, premise) in premises.iter().enumerate() {
        lines.push(format!(" {}. {premise}", index + 1));
    }
    lines.join("\n")
}

/// Each model on a line, or a note that there are none.
pub fn models(models: impl Iterator<Item = Assignment>) -> String {
    let mut lines = vec!["Models:".to_string()];
    for model in models {
        lines.push(format!(" {model}"));
    }
    if lines.len() == 1 {
        lines.push(" (none)".to_string());
    }
    lines.join("\n")
}

/// A syntax error in the premise given as the argument at the (one-based) index.
pub fn syntax_error(program: &str, argument: usize, error: &SyntaxError, colour: bool) -> String {
    let location = format!("arg={argument} pos={}", error.position);
    let label = "Syntax error:";
    match colour {
        true => format!(
            "{program}: {}: {} {}",
            location.with(Color::White).bold(),
            label.with(Color::Red).bold(),
            error.message()
        ),
        false => format!("{program}: {location}: {label} {}", error.message()),
    }
}
