use clap::Parser;

/// The default level of detail for logs.
pub const DETAIL: u8 = 0;

/// Lists atomic propositions which are (dis)proven by given list of premises.
///
/// Premises must be valid sentences built from parentheses; atomics, A, B, C, and D; and operators, '~', '^', 'v', and '=>' (standard interpretations and precedence).
#[derive(Parser, Debug)]
#[command(version, about, long_about, after_help = "Designed as an aid for the card game Ergo.")]
pub struct Args {
    /// One of the logical premises
    #[arg(value_name = "PREMISE", required = true, num_args = 1..)]
    premises: Vec<String>,

    /// Print the compiled premises
    #[arg(short = 'c', long, default_value_t = false)]
    print_compiled: bool,

    /// Print implications in plain text (vs. symbolically)
    #[arg(short = 't', long, default_value_t = false)]
    plain_text: bool,

    /// Print each model of the premises
    #[arg(short, long, default_value_t = false)]
    models: bool,

    /// Report invalid premises and continue with the remainder, rather than stopping
    #[arg(long, default_value_t = false)]
    skip_invalid: bool,

    /// Print without colour or other styling
    #[arg(long = "no-colour", default_value_t = false)]
    no_colour: bool,

    /// The level to which details are logged, from 0 (off) to 2 (everything)
    #[arg(short, long, value_name = "LEVEL", default_value_t = DETAIL)]
    detail: u8,
}

#[derive(Clone, Debug)]
pub struct CliConfig {
    pub premises: Vec<String>,
    pub print_compiled: bool,
    pub plain_text: bool,
    pub show_models: bool,
    pub skip_invalid: bool,
    pub colour: bool,
    pub detail: u8,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            premises: Vec::default(),
            print_compiled: false,
            plain_text: false,
            show_models: false,
            skip_invalid: false,
            colour: true,
            detail: DETAIL,
        }
    }
}

impl CliConfig {
    pub fn from_args(args: Args) -> Self {
        CliConfig {
            premises: args.premises,
            print_compiled: args.print_compiled,
            plain_text: args.plain_text,
            show_models: args.models,
            skip_invalid: args.skip_invalid,
            colour: !args.no_colour,
            detail: args.detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_of(arguments: &[&str]) -> CliConfig {
        let args = Args::try_parse_from(arguments).unwrap();
        CliConfig::from_args(args)
    }

    #[test]
    fn defaults() {
        let config = config_of(&["ergo", "a"]);
        let default = CliConfig::default();

        assert_eq!(config.premises, vec!["a".to_string()]);
        assert_eq!(config.print_compiled, default.print_compiled);
        assert_eq!(config.plain_text, default.plain_text);
        assert_eq!(config.show_models, default.show_models);
        assert_eq!(config.skip_invalid, default.skip_invalid);
        assert_eq!(config.colour, default.colour);
        assert_eq!(config.detail, DETAIL);
    }

    #[test]
    fn flags() {
        let config = config_of(&["ergo", "-c", "-t", "-m", "--no-colour", "--skip-invalid", "-d", "2", "a", "~a => b"]);

        assert_eq!(config.premises, vec!["a".to_string(), "~a => b".to_string()]);
        assert!(config.print_compiled);
        assert!(config.plain_text);
        assert!(config.show_models);
        assert!(config.skip_invalid);
        assert!(!config.colour);
        assert_eq!(config.detail, 2);
    }

    #[test]
    fn a_premise_is_required() {
        assert!(Args::try_parse_from(["ergo"]).is_err());
        assert!(Args::try_parse_from(["ergo", "-c"]).is_err());
    }

    #[test]
    fn definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
