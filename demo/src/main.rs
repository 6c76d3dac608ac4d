//! Parses Boolean expressions and evaluates them.
//!
//! With an expression argument, evaluates it once; otherwise reads one expression per line
//! from stdin.

use std::{
    collections::HashMap,
    io::{self, BufRead, Write},
};

use anyhow::{anyhow, Context};
use boolparse::{ast::MAX_TABLE_VARIABLES, grammar::expression, parse_pretty, Node};
use clap::Parser;

#[derive(Parser)]
#[command(name = "boolparse-demo")]
#[command(about = "Parse and evaluate Boolean expressions")]
#[command(after_help = "\
EXAMPLES:
    boolparse-demo '!a & b | c' --set b=true
    boolparse-demo 'x | !y' --table
    echo 'a & (b | c)' | boolparse-demo --set a=1 --set c=1
")]
struct Args {
    /// Expression to evaluate. Read line by line from stdin when omitted.
    expression: Option<String>,

    /// Assign a variable, as name=true/false (or 1/0). Unassigned variables are false.
    #[arg(short, long = "set", value_name = "NAME=BOOL", value_parser = parse_assignment)]
    assignments: Vec<(String, bool)>,

    /// Print the truth table over all variables instead of a single value.
    #[arg(short, long)]
    table: bool,

    /// Render syntax errors without ANSI colors.
    #[arg(long)]
    no_color: bool,
}

fn parse_assignment(arg: &str) -> anyhow::Result<(String, bool)> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("expected NAME=BOOL, got {arg:?}"))?;
    let value = match value.trim() {
        "true" | "1" => true,
        "false" | "0" => false,
        other => return Err(anyhow!("not a boolean: {other:?}")),
    };
    Ok((name.trim().to_string(), value))
}

fn print_table(node: &Node, out: &mut impl Write) -> anyhow::Result<()> {
    let names = node.variables();
    let rows = node.truth_table().ok_or_else(|| {
        anyhow!(
            "{} variables is too many for a truth table (at most {MAX_TABLE_VARIABLES})",
            names.len()
        )
    })?;
    writeln!(out, "{} | =", names.join(" "))?;
    for row in rows {
        let cells: Vec<String> = names
            .iter()
            .zip(row.assignment.values())
            .map(|(name, value)| format!("{:>width$}", u8::from(*value), width = name.len()))
            .collect();
        writeln!(out, "{} | {}", cells.join(" "), u8::from(row.value))?;
    }
    Ok(())
}

/// Parse one expression, with syntax errors rendered against `text`.
fn parse_expression(text: &str, args: &Args) -> anyhow::Result<Node> {
    let node =
        parse_pretty(expression, text, !args.no_color).map_err(|rendered| anyhow!(rendered))?;
    log::info!("parsed {text:?} as {node}");
    Ok(node)
}

fn report(
    node: &Node,
    args: &Args,
    vars: &HashMap<String, bool>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if args.table {
        print_table(node, out)
    } else {
        writeln!(out, "{}", node.eval(vars))?;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let vars: HashMap<String, bool> = args.assignments.iter().cloned().collect();

    let mut out = io::stdout().lock();
    if let Some(text) = &args.expression {
        let node = parse_expression(text, &args)?;
        return report(&node, &args, &vars, &mut out);
    }

    // a bad line is reported and skipped, the rest of the input is still evaluated
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_expression(&line, &args) {
            Ok(node) => report(&node, &args, &vars, &mut out)?,
            Err(err) => eprintln!("{err}"),
        }
    }
    Ok(())
}
