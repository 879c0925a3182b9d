use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use safecalc::{
    compute_with,
    config::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_LENGTH, DEFAULT_MAX_NESTING, Limits},
    display::normalize,
    interpreter::value::Number,
};
use tracing_subscriber::EnvFilter;

/// safecalc evaluates arithmetic expressions, and nothing but arithmetic.
///
/// Numbers, parentheses, `+ - * / %` and `**` are understood. Names, calls
/// and anything else are rejected before evaluation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads expressions from a file, one per line, instead of the command
    /// line.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Prints results exactly as computed instead of showing integral reals
    /// as integers.
    #[arg(long)]
    raw: bool,

    /// Maximum nesting of parentheses and `**` chains.
    #[arg(long, env = "SAFECALC_MAX_NESTING", default_value_t = DEFAULT_MAX_NESTING)]
    max_nesting: usize,

    /// Maximum recursion depth while evaluating.
    #[arg(long, env = "SAFECALC_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Maximum length of an expression in bytes.
    #[arg(long, env = "SAFECALC_MAX_LENGTH", default_value_t = DEFAULT_MAX_LENGTH)]
    max_length: usize,

    /// The expression to evaluate. Without one, expressions are read from
    /// standard input, one per line.
    expression: Option<String>,
}

impl Args {
    const fn runner(&self) -> Runner {
        Runner { limits: Limits { max_nesting: self.max_nesting,
                                  max_depth:   self.max_depth,
                                  max_length:  self.max_length, },
                 raw:    self.raw, }
    }
}

/// How a run ended, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Outcome {
    /// Every expression evaluated.
    Success,
    /// At least one expression failed to parse or evaluate.
    Failed,
    /// Input could not be read or output could not be written.
    Unusable,
}

impl Outcome {
    const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failed => 1,
            Self::Unusable => 2,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        Self::from(outcome.code())
    }
}

/// Evaluates expressions and writes their results and errors.
#[derive(Debug, Clone, Copy)]
struct Runner {
    limits: Limits,
    raw:    bool,
}

impl Runner {
    /// Evaluates every non-blank line of `input`, printing each outcome as it
    /// goes.
    ///
    /// A line that is not valid UTF-8 is reported and skipped. Any other read
    /// error is reported and ends the run. Both make the outcome `Unusable`.
    ///
    /// # Errors
    /// Returns an error if `out` or `err` cannot be written to.
    fn evaluate_lines(&self,
                      input: impl BufRead,
                      out: &mut impl Write,
                      err: &mut impl Write)
                      -> io::Result<Outcome> {
        let mut outcome = Outcome::Success;

        for (index, line) in input.lines().enumerate() {
            match line {
                Ok(line) if line.trim().is_empty() => {},
                Ok(line) => outcome = outcome.max(self.evaluate_line(&line, out, err)?),
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    writeln!(err, "error: line {} is not valid UTF-8", index + 1)?;
                    outcome = Outcome::Unusable;
                },
                Err(e) => {
                    writeln!(err, "error: failed to read input: {e}")?;
                    return Ok(Outcome::Unusable);
                },
            }
        }

        Ok(outcome)
    }

    /// Evaluates one expression, printing the result to `out` or the error
    /// to `err`.
    fn evaluate_line(&self,
                     expression: &str,
                     out: &mut impl Write,
                     err: &mut impl Write)
                     -> io::Result<Outcome> {
        match compute_with(expression, &self.limits) {
            Ok(value) => {
                writeln!(out, "{}", self.render(value))?;
                Ok(Outcome::Success)
            },
            Err(e) => {
                writeln!(err, "error: {e}")?;
                Ok(Outcome::Failed)
            },
        }
    }

    fn render(&self, value: Number) -> String {
        if self.raw { value.to_string() } else { normalize(value).to_string() }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();
    let runner = args.runner();
    let (mut out, mut err) = (io::stdout(), io::stderr());

    let outcome = if let Some(expression) = &args.expression {
        runner.evaluate_line(expression, &mut out, &mut err)
    } else if let Some(path) = &args.file {
        let Ok(file) = File::open(path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return Outcome::Unusable.into();
        };
        runner.evaluate_lines(BufReader::new(file), &mut out, &mut err)
    } else {
        runner.evaluate_lines(io::stdin().lock(), &mut out, &mut err)
    };

    outcome.unwrap_or_else(|e| {
               eprintln!("error: failed to write output: {e}");
               Outcome::Unusable
           })
           .into()
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use super::*;

    fn runner() -> Runner {
        Runner { limits: Limits::default(),
                 raw:    false, }
    }

    fn run(input: &[u8]) -> (Outcome, String, String) {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let outcome = runner().evaluate_lines(Cursor::new(input), &mut out, &mut err).unwrap();
        (outcome, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    /// A reader whose every read fails.
    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device unplugged"))
        }
    }

    #[test]
    fn all_lines_succeed() {
        let (outcome, out, err) = run(b"1 + 1\n\n   \n4 / 2\n7 / 2\n");
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(out, "2\n2\n3.5\n");
        assert_eq!(err, "");
        assert_eq!(outcome.code(), 0);
    }

    #[test]
    fn failures_are_reported_and_the_run_continues() {
        let (outcome, out, err) = run(b"1 / 0\nabs(1)\n2 ** 3\n");
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(out, "8\n");
        assert_eq!(err,
                   "error: Division by zero at position 2.\nerror: Disallowed construct at \
                    position 0: call to `abs`.\n");
        assert_eq!(outcome.code(), 1);
    }

    #[test]
    fn undecodable_lines_are_reported_and_skipped() {
        let (outcome, out, err) = run(b"1+1\n\xff\xfe\n2+2\n");
        assert_eq!(outcome, Outcome::Unusable);
        assert_eq!(out, "2\n4\n");
        assert_eq!(err, "error: line 2 is not valid UTF-8\n");
        assert_eq!(outcome.code(), 2);
    }

    #[test]
    fn read_errors_stop_the_run() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let outcome = runner().evaluate_lines(BufReader::new(BrokenReader), &mut out, &mut err)
                              .unwrap();
        assert_eq!(outcome, Outcome::Unusable);
        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap(),
                   "error: failed to read input: device unplugged\n");
    }

    #[test]
    fn unreadable_input_outranks_failed_expressions() {
        let (outcome, ..) = run(b"1/0\n\xff\n");
        assert_eq!(outcome, Outcome::Unusable);
    }

    #[test]
    fn raw_mode_keeps_integral_reals() {
        let raw = Runner { raw: true,
                           ..runner() };
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let outcome = raw.evaluate_line("4 / 2", &mut out, &mut err).unwrap();
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(out, b"2.0\n");
    }
}
