use clap::{Parser, Subcommand};
use polish_notation::{
    convert_to_postfix, convert_to_prefix,
    error::{Error, ErrorReport},
    evaluate_postfix, extract_variables,
    notation::{converter::postfix::ShuntingStep, evaluator::core::{Bindings, EvalStep}},
    three_address_code, trace_evaluation, trace_postfix,
    util::render::space_separated,
};
use serde::Serialize;
use serde_json::json;

/// polish converts infix arithmetic to postfix and prefix notation and
/// evaluates it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Print results and errors as JSON.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an infix expression to postfix (Shunting Yard).
    Postfix {
        expression: String,

        /// Show the operator stack and output queue after every token.
        #[arg(short, long)]
        trace: bool,
    },
    /// Convert an infix expression to prefix.
    Prefix { expression: String },
    /// Evaluate a postfix expression such as "A B +".
    Eval {
        postfix: String,

        /// A variable value, written NAME=VALUE. Repeatable.
        #[arg(short, long = "bind", value_parser = parse_binding)]
        bindings: Vec<(char, f64)>,
    },
    /// Convert an infix expression to postfix and evaluate it.
    Run {
        expression: String,

        /// A variable value, written NAME=VALUE. Repeatable.
        #[arg(short, long = "bind", value_parser = parse_binding)]
        bindings: Vec<(char, f64)>,

        /// Show the value stack after every postfix token.
        #[arg(short, long)]
        trace: bool,
    },
    /// Print the triples and quadruples of an infix expression.
    Tac { expression: String },
    /// List the variables of an infix expression.
    Vars { expression: String },
}

fn parse_binding(raw: &str) -> Result<(char, f64), String> {
    let (name, value) = raw.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;

    let mut chars = name.trim().chars();
    let name = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c,
        _ => return Err(format!("variable names are single letters, got '{name}'")),
    };

    let value = value.trim()
                     .parse()
                     .map_err(|_| format!("'{value}' is not a number"))?;
    Ok((name, value))
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

fn print_shunting_steps(steps: &[ShuntingStep]) {
    println!("{:<6} {:<13} {:<24} Output", "Token", "Action", "Stack");
    for step in steps {
        println!("{:<6} {:<13} {:<24} {}",
                 step.token.to_string(),
                 format!("{:?}", step.action),
                 space_separated(&step.stack),
                 space_separated(&step.output));
    }
}

fn print_eval_steps(steps: &[EvalStep]) {
    println!("{:<6} Stack", "Token");
    for step in steps {
        println!("{:<6} {}", step.token.to_string(), space_separated(&step.stack));
    }
}

fn run(args: &Args) -> Result<(), Error> {
    match &args.command {
        Command::Postfix { expression, trace } => {
            if *trace {
                let (postfix, steps) = trace_postfix(expression)?;
                if args.json {
                    println!("{}", to_json(&json!({ "postfix": postfix, "steps": steps })));
                } else {
                    print_shunting_steps(&steps);
                    println!("\n{postfix}");
                }
            } else {
                let postfix = convert_to_postfix(expression)?;
                if args.json {
                    println!("{}", to_json(&json!({ "postfix": postfix })));
                } else {
                    println!("{postfix}");
                }
            }
        },
        Command::Prefix { expression } => {
            let prefix = convert_to_prefix(expression)?;
            if args.json {
                println!("{}", to_json(&json!({ "prefix": prefix })));
            } else {
                println!("{prefix}");
            }
        },
        Command::Eval { postfix, bindings } => {
            let bindings = bindings.iter().copied().collect::<Bindings>();
            let value = evaluate_postfix(postfix, &bindings)?;
            if args.json {
                println!("{}", to_json(&json!({ "value": value })));
            } else {
                println!("{value}");
            }
        },
        Command::Run { expression,
                       bindings,
                       trace, } => {
            let bindings = bindings.iter().copied().collect::<Bindings>();
            let (postfix, value, steps) = trace_evaluation(expression, &bindings)?;
            if args.json {
                let steps = if *trace { Some(steps) } else { None };
                println!("{}",
                         to_json(&json!({ "postfix": postfix, "value": value, "steps": steps })));
            } else {
                if *trace {
                    print_eval_steps(&steps);
                    println!();
                }
                println!("[{postfix}] = {value}");
            }
        },
        Command::Tac { expression } => {
            let (triples, quadruples) = three_address_code(expression)?;
            if args.json {
                println!("{}",
                         to_json(&json!({ "triples": triples, "quadruples": quadruples })));
            } else {
                println!("Triples");
                for (i, t) in triples.iter().enumerate() {
                    println!("({}) {} {} {}", i + 1, t.op, t.arg1, t.arg2);
                }
                println!("\nQuadruples");
                for q in &quadruples {
                    println!("{} {} {} {}", q.op, q.arg1, q.arg2, q.result);
                }
            }
        },
        Command::Vars { expression } => {
            let variables = extract_variables(expression)?;
            if args.json {
                println!("{}", to_json(&json!({ "variables": variables })));
            } else {
                println!("{}", space_separated(&variables));
            }
        },
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        if args.json {
            eprintln!("{}", to_json(&ErrorReport::from(&e)));
        } else {
            eprintln!("{}: {e}", e.kind());
        }
        std::process::exit(1);
    }
}
