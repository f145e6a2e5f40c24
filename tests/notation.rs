use std::fs;

use polish_notation::{
    convert_to_postfix, convert_to_prefix, evaluate_expression, evaluate_postfix, extract_variables,
    notation::{
        converter::{postfix::to_postfix, prefix::postfix_from_ast},
        evaluator::core::Bindings,
        lexer::{strip_positions, tokenize},
        parser::core::parse,
    },
    three_address_code,
    util::render::space_separated,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// One fenced `polish` block of the book, as `key: value` pairs.
#[derive(Default)]
struct Example {
    infix:      Option<String>,
    postfix:    Option<String>,
    prefix:     Option<String>,
    bindings:   Bindings,
    value:      Option<f64>,
    error:      Option<String>,
    triples:    Option<String>,
    quadruples: Option<String>,
}

fn parse_example(block: &str) -> Example {
    let mut example = Example::default();
    for line in block.lines().filter(|l| !l.trim().is_empty()) {
        let (key, value) = line.split_once(':')
                               .unwrap_or_else(|| panic!("malformed example line: {line}"));
        let value = value.trim().to_string();
        match key.trim() {
            "infix" => example.infix = Some(value),
            "postfix" => example.postfix = Some(value),
            "prefix" => example.prefix = Some(value),
            "value" => example.value = Some(value.parse().expect("numeric value")),
            "error" => example.error = Some(value),
            "triples" => example.triples = Some(value),
            "quadruples" => example.quadruples = Some(value),
            "bind" => {
                for pair in value.split_whitespace() {
                    let (name, number) = pair.split_once('=').expect("NAME=VALUE");
                    example.bindings.insert(name.chars().next().expect("name"),
                                            number.parse().expect("numeric binding"));
                }
            },
            other => panic!("unknown example key: {other}"),
        }
    }
    example
}

fn check_example(example: &Example) -> Result<(), String> {
    if let Some(kind) = &example.error {
        let result = match (&example.infix, &example.postfix) {
            (Some(infix), _) if example.bindings.is_empty() => convert_to_postfix(infix).map(|_| ()),
            (Some(infix), _) => evaluate_expression(infix, &example.bindings).map(|_| ()),
            (None, Some(postfix)) => evaluate_postfix(postfix, &example.bindings).map(|_| ()),
            (None, None) => return Err("error example without input".to_string()),
        };
        return match result {
            Err(e) if &e.kind().to_string() == kind => Ok(()),
            Err(e) => Err(format!("expected {kind}, got {}: {e}", e.kind())),
            Ok(()) => Err(format!("expected {kind}, got success")),
        };
    }

    if let Some(infix) = &example.infix {
        if let Some(expected) = &example.postfix {
            let actual = convert_to_postfix(infix).map_err(|e| e.to_string())?;
            if &actual != expected {
                return Err(format!("postfix of {infix}: expected {expected}, got {actual}"));
            }
        }
        if let Some(expected) = &example.prefix {
            let actual = convert_to_prefix(infix).map_err(|e| e.to_string())?;
            if &actual != expected {
                return Err(format!("prefix of {infix}: expected {expected}, got {actual}"));
            }
        }
    }

    if let (Some(infix), true) = (&example.infix,
                                  example.triples.is_some() || example.quadruples.is_some())
    {
        let (triples, quadruples) = three_address_code(infix).map_err(|e| e.to_string())?;
        let triples = triples.iter()
                             .map(|t| format!("{} {} {}", t.op, t.arg1, t.arg2))
                             .collect::<Vec<_>>()
                             .join("; ");
        let quadruples = quadruples.iter()
                                   .map(|q| format!("{} {} {} {}", q.op, q.arg1, q.arg2, q.result))
                                   .collect::<Vec<_>>()
                                   .join("; ");
        for (name, expected, actual) in [("triples", &example.triples, triples),
                                         ("quadruples", &example.quadruples, quadruples)]
        {
            if let Some(expected) = expected
               && *expected != actual
            {
                return Err(format!("{name} of {infix}: expected {expected}, got {actual}"));
            }
        }
    }

    if let Some(expected) = example.value {
        let actual = match (&example.infix, &example.postfix) {
            (Some(infix), _) => evaluate_expression(infix, &example.bindings),
            (None, Some(postfix)) => evaluate_postfix(postfix, &example.bindings),
            (None, None) => return Err("value example without input".to_string()),
        }.map_err(|e| e.to_string())?;
        if (actual - expected).abs() > 1e-9 {
            return Err(format!("expected value {expected}, got {actual}"));
        }
    }

    Ok(())
}

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, block) in extract_example_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = check_example(&parse_example(&block)) {
                panic!("Example {} in {:?} failed:\n{}\nError: {}", i + 1, path, block, e);
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_example_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```polish") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// Rows of `tests/expressions.txt`: infix, postfix, prefix.
fn expression_table() -> Vec<(String, String, String)> {
    let table = fs::read_to_string("tests/expressions.txt").expect("missing file");
    table.lines()
         .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
         .map(|line| {
             let columns = line.split('|').map(str::trim).collect::<Vec<_>>();
             assert_eq!(columns.len(), 3, "bad row: {line}");
             (columns[0].to_string(), columns[1].to_string(), columns[2].to_string())
         })
         .collect()
}

/// Distinct, non-zero values for every letter.
fn all_letters_bound() -> Bindings {
    ('A'..='Z').chain('a'..='z')
               .enumerate()
               .map(|(i, name)| (name, f64::from(u32::try_from(i % 26).unwrap() + 2) / 2.0))
               .collect()
}

#[test]
fn expression_table_converts() {
    for (infix, postfix, prefix) in expression_table() {
        assert_eq!(convert_to_postfix(&infix).unwrap(), postfix, "postfix of {infix}");
        assert_eq!(convert_to_prefix(&infix).unwrap(), prefix, "prefix of {infix}");
    }
}

#[test]
fn postfix_and_prefix_evaluate_identically() {
    let bindings = all_letters_bound();
    for (infix, ..) in expression_table() {
        let postfix = convert_to_postfix(&infix).unwrap();
        let prefix = convert_to_prefix(&infix).unwrap();

        let from_postfix = evaluate_postfix(&postfix, &bindings).unwrap();
        let from_prefix = polish_notation::evaluate_prefix(&prefix, &bindings).unwrap();

        assert!(from_postfix == from_prefix || (from_postfix.is_nan() && from_prefix.is_nan()),
                "{infix}: postfix gave {from_postfix}, prefix gave {from_prefix}");
    }
}

#[test]
fn shunting_yard_matches_post_order_traversal() {
    for (infix, ..) in expression_table() {
        let tokens = tokenize(&infix).unwrap();
        let ast = parse(&tokens).unwrap();
        assert_eq!(to_postfix(&tokens).unwrap(), postfix_from_ast(&ast), "{infix}");
    }
}

#[test]
fn conversions_are_repeatable() {
    for (infix, ..) in expression_table() {
        assert_eq!(convert_to_postfix(&infix).unwrap(), convert_to_postfix(&infix).unwrap());
        assert_eq!(convert_to_prefix(&infix).unwrap(), convert_to_prefix(&infix).unwrap());
    }
}

#[test]
fn whitespace_is_optional() {
    assert_eq!(convert_to_postfix("(A+B)*C^D-E").unwrap(), "A B + C D ^ * E -");
    assert_eq!(convert_to_postfix("  A\t+ B  ").unwrap(), "A B +");
}

#[test]
fn multi_digit_numbers_stay_whole() {
    let tokens = strip_positions(&tokenize("12 + 3").unwrap());
    assert_eq!(space_separated(&tokens), "12 + 3");
    assert_eq!(tokens.len(), 3);
    assert_eq!(convert_to_postfix("100 * 20").unwrap(), "100 20 *");
}

#[test]
fn variables_are_unique_and_sorted() {
    assert_eq!(extract_variables("b + A * B - a / A").unwrap(), vec!['A', 'B', 'a', 'b']);
    assert_eq!(extract_variables("(Z").unwrap(), vec!['Z']);
    assert!(extract_variables("A + BC").is_err());
}

fn chain(operand: &str, op: &str, terms: usize) -> String {
    vec![operand; terms].join(op)
}

#[test]
fn long_sums_convert_without_recursion() {
    let source = chain("1", "+", 50_000);

    let postfix = convert_to_postfix(&source).unwrap();
    assert!(postfix.starts_with("1 1 + 1 +"));
    assert_eq!(postfix.split(' ').count(), 99_999);

    let prefix = convert_to_prefix(&source).unwrap();
    assert!(prefix.starts_with("+ + +") && prefix.ends_with("1 1 1"));
    assert_eq!(evaluate_expression(&source, &Bindings::new()).unwrap(), 50_000.0);
}

#[test]
fn long_power_chains_convert_without_recursion() {
    let source = chain("1", "^", 10_000);

    let prefix = convert_to_prefix(&source).unwrap();
    assert!(prefix.starts_with("^ 1 ^ 1 ^"));
    assert_eq!(prefix.split(' ').count(), 19_999);

    let tokens = tokenize(&source).unwrap();
    let ast = parse(&tokens).unwrap();
    assert_eq!(to_postfix(&tokens).unwrap(), postfix_from_ast(&ast));
    assert_eq!(polish_notation::evaluate_prefix(&prefix, &Bindings::new()).unwrap(), 1.0);
}

#[test]
fn long_chains_lower_to_three_address_code() {
    let (triples, quadruples) = three_address_code(&chain("A", "*", 20_000)).unwrap();
    assert_eq!(triples.len(), 19_999);
    assert_eq!(quadruples.last().unwrap().result.to_string(), "T19999");
}

#[test]
fn offsets_stay_exact_over_long_input() {
    let source = chain("A", " + ", 40_000);
    let tokens = tokenize(&source).unwrap();
    assert_eq!(tokens.len(), 79_999);
    assert_eq!(tokens.last().unwrap().1, source.chars().count() - 1);
    assert_eq!(tokens[2].1, 4);
}
