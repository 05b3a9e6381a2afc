use std::fs;

use boolex::{
    get_result,
    interpreter::{
        evaluator::core::{Context, NotSemantics},
        parser::core::Rule,
    },
};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// boolex evaluates boolean logic expressions with variables, assignment and
/// printing.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells boolex to read the script from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// The grammar rule the input is parsed with.
    #[arg(short, long, value_enum, default_value_t = RuleArg::Expression)]
    rule: RuleArg,

    /// Makes `not` negate its operand instead of its own text.
    #[arg(long)]
    negate_operand: bool,

    /// Logs parsing and evaluation steps to stderr.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RuleArg {
    /// A general expression such as `(a xor b) or c`.
    Expression,
    /// An assignment such as `a = true;`.
    Assignment,
    /// A unary statement such as `a not;` or `print a;`.
    Unary,
    /// Statements separated by `;`.
    Program,
}

impl From<RuleArg> for Rule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::Expression => Self::Expression,
            RuleArg::Assignment => Self::Assignment,
            RuleArg::Unary => Self::Unary,
            RuleArg::Program => Self::Program,
        }
    }
}

/// Installs a stderr subscriber when `--verbose` is given or `RUST_LOG` is
/// set; otherwise logging stays off.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("boolex=debug")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => return,
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .with_target(true)
                             .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut context = Context::new();
    if args.negate_operand {
        context.not_semantics = NotSemantics::NegateOperand;
    }

    match get_result(&script, args.rule.into(), &mut context) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
