use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rex::generator::generate_code;
use rex::{Rex, chars, helper, tokens};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print builder code for a regular expression
    Generate {
        /// Regular expression to transcribe
        #[arg(value_name = "REGEX")]
        pattern: String,
    },

    /// Print a pattern matching every integer in a range
    #[command(allow_negative_numbers = true)]
    Range {
        /// Lower bound (bounds may come in either order)
        from: i64,

        /// Upper bound
        to: i64,

        /// Match whole strings only
        #[arg(short, long)]
        anchored: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Generate { pattern } => {
            if pattern.trim().is_empty() {
                bail!("Nothing to generate: the pattern is empty.");
            }
            let code = generate_code(&pattern).with_context(|| format!("Failed to transcribe {pattern:?}"))?;
            println!("{code}");
        }
        Command::Range { from, to, anchored } => {
            println!("{}", range_pattern(from, to, anchored)?);
        }
    }

    Ok(())
}

/// The range pattern, checked to compile before it is printed.
fn range_pattern(from: i64, to: i64, anchored: bool) -> Result<Rex> {
    let range = helper::number_range(from, to);
    let rex = if anchored {
        Rex::new(tokens![chars::begin(), range, chars::end()])
    } else {
        Rex::new(tokens![range])
    };
    rex.compile().context("Synthesized pattern does not compile")?;
    Ok(rex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_accepts_negative_bounds() {
        let args = Args::try_parse_from(["rex", "range", "-3", "5", "-a"]).unwrap();
        match args.command {
            Command::Range { from, to, anchored } => {
                assert_eq!((from, to), (-3, 5));
                assert!(anchored);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn range_is_unanchored_by_default() {
        let args = Args::try_parse_from(["rex", "range", "-20", "-10"]).unwrap();
        match args.command {
            Command::Range { from, to, anchored } => {
                assert_eq!((from, to), (-20, -10));
                assert!(!anchored);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn range_rejects_non_numeric_bounds() {
        assert!(Args::try_parse_from(["rex", "range", "one", "5"]).is_err());
    }

    #[test]
    fn anchored_range_matches_whole_strings() {
        let re = range_pattern(-3, 5, true).unwrap().compile().unwrap();
        assert!(re.is_match("-3"));
        assert!(re.is_match("0"));
        assert!(re.is_match("5"));
        assert!(!re.is_match("-4"));
        assert!(!re.is_match("15"));
    }

    #[test]
    fn unanchored_range_matches_inside_text() {
        let rex = range_pattern(5, -3, false).unwrap();
        assert!(!rex.as_str().starts_with('^'));
        assert!(rex.compile().unwrap().is_match("x=15"));
    }

    #[test]
    fn generate_takes_a_pattern() {
        let args = Args::try_parse_from(["rex", "generate", "[a-z]+"]).unwrap();
        assert!(matches!(args.command, Command::Generate { pattern } if pattern == "[a-z]+"));
    }
}
