use clap::Parser;
use sche::{
    Engine, EngineOptions, Error,
    arena::{Arena, ArenaOptions, Growth},
    evaluator, parser, render_error, render_error_to_string_no_color,
    tokenizer::TokenizerOptions,
};
use std::io::BufRead;
use std::process::ExitCode;

/// sche - evaluate prefix-notation integer expressions
#[derive(Parser, Debug)]
#[command(name = "sche")]
#[command(about = "Evaluate prefix-notation integer expressions", long_about = None)]
struct Args {
    /// Expression to evaluate (if not provided, reads one per line from stdin)
    #[arg(conflicts_with = "command")]
    expression: Option<String>,

    /// Expression to evaluate, as an option
    #[arg(short = 'c', long = "command", value_name = "EXPR")]
    command: Option<String>,

    /// Accept `0x1F` (hex) and `017` (octal) integer literals
    #[arg(long)]
    radix_prefixes: bool,

    /// Reject expressions with more tokens than this
    #[arg(long, value_name = "N")]
    max_tokens: Option<usize>,

    /// Bytes reserved up front for each expression's arena
    #[arg(long, value_name = "BYTES", default_value_t = sche::arena::DEFAULT_CAPACITY)]
    arena_capacity: usize,

    /// Fail instead of growing when the arena is full
    #[arg(long)]
    fixed_arena: bool,

    /// Maximum nesting depth of expressions
    #[arg(long, value_name = "N", default_value_t = sche::parser::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Render error reports without colors
    #[arg(long)]
    no_color: bool,

    /// Print the token list (for debugging)
    #[arg(long)]
    debug_tokens: bool,

    /// Print the parsed tree (for debugging)
    #[arg(long)]
    debug_parse: bool,
}

impl Args {
    fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            arena: ArenaOptions {
                initial_capacity: self.arena_capacity,
                growth: if self.fixed_arena {
                    Growth::Fixed
                } else {
                    Growth::Chained
                },
            },
            tokenizer: TokenizerOptions {
                radix_prefixes: self.radix_prefixes,
                max_tokens: self.max_tokens,
            },
            max_depth: self.max_depth,
        }
    }
}

struct Interpreter {
    engine: Engine,
    arena: Arena,
    args: Args,
}

impl Interpreter {
    fn new(args: Args) -> Self {
        let options = args.engine_options();
        Self {
            engine: Engine::new(options),
            arena: Arena::with_options(options.arena),
            args,
        }
    }

    /// Evaluates one expression, printing the value or the error report.
    /// Returns whether it succeeded.
    fn interpret_input(&mut self, input: &str) -> bool {
        let result = self.run(input);
        self.arena.reset();
        match result {
            Ok(value) => {
                println!("{value}");
                true
            }
            Err(e) => {
                tracing::debug!(stage = %e.stage(), code = e.code(), "evaluation failed");
                if self.args.no_color {
                    eprint!("{}", render_error_to_string_no_color(&e, input));
                } else {
                    render_error(&e, input);
                }
                false
            }
        }
    }

    /// One pass through the pipeline; the debug dumps show the same tokens
    /// and tree that get evaluated.
    fn run(&self, input: &str) -> Result<i64, Error> {
        let tokens = self.engine.tokenize(&self.arena, input)?;
        if self.args.debug_tokens {
            println!("=== Tokens ===");
            for token in tokens.iter() {
                println!("{:>4}..{:<4} {}", token.span.0.start, token.span.0.end, token.kind);
            }
            println!();
        }

        let tree = parser::parse_with_max_depth(
            &self.arena,
            &tokens,
            self.engine.options().max_depth,
        )?;
        if self.args.debug_parse {
            println!("=== Parsed Tree ===");
            println!("{tree}");
            println!("{tree:#?}");
            println!();
        }

        Ok(evaluator::evaluate(&tree)?)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let expression = args.expression.clone().or_else(|| args.command.clone());
    let mut interpreter = Interpreter::new(args);

    // Check if we have a direct expression argument
    if let Some(expr) = expression {
        return if interpreter.interpret_input(&expr) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    // Otherwise evaluate stdin line by line
    let stdin = std::io::stdin();
    let mut all_ok = true;
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading line from stdin: {}", e);
                return ExitCode::FAILURE;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        all_ok &= interpreter.interpret_input(&line);
    }

    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpreter(args: &[&str]) -> Interpreter {
        let argv = std::iter::once("sche").chain(args.iter().copied());
        Interpreter::new(Args::parse_from(argv))
    }

    #[test]
    fn test_debug_dumps_come_from_the_evaluated_pass() {
        // Room for one pass over the input, not two.
        let interpreter = interpreter(&[
            "--fixed-arena",
            "--arena-capacity",
            "600",
            "--debug-tokens",
            "--debug-parse",
        ]);
        assert_eq!(interpreter.run("(+ 1 2)"), Ok(3));
        assert!(interpreter.arena.used() * 2 > 600);
    }

    #[test]
    fn test_arena_is_reset_between_inputs() {
        let mut interpreter = interpreter(&["--fixed-arena", "--arena-capacity", "2048"]);
        for _ in 0..50 {
            assert!(interpreter.interpret_input("(* (+ 1 2) (- 10 4))"));
        }
        assert_eq!(interpreter.arena.used(), 0);
    }
}
