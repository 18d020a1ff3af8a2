//! Evaluator-facing interchange JSON.
//!
//! The external funcon evaluator can consume either the [`crate::ast`]
//! types directly or this serialized form. Every node is a tagged object
//! with a `"kind"` discriminator. Map contents serialize as an array of
//! `[key, value]` pairs so that pair order and duplicate keys survive
//! the trip (a JSON object would silently dedup).

use crate::ast::{Assertion, Document, Expr, Value as AstValue};
use serde_json::{json, Value};

pub fn to_json(doc: &Document) -> Value {
    let assertions: Vec<Value> = doc.assertions.iter().map(assertion_to_json).collect();
    json!({
        "kind": "document",
        "program": expr_to_json(&doc.program),
        "assertions": assertions,
    })
}

pub fn expr_to_json(e: &Expr) -> Value {
    match e {
        Expr::Call { name, args } => {
            let args: Vec<Value> = args.iter().map(expr_to_json).collect();
            json!({ "kind": "call", "name": name, "args": args })
        }
        Expr::UnaryApply { name, arg } => {
            json!({ "kind": "apply", "name": name, "arg": expr_to_json(arg) })
        }
        Expr::Name(name) => json!({ "kind": "name", "name": name }),
        Expr::Literal(v) => json!({ "kind": "literal", "value": value_to_json(v) }),
        // Grouping is non-semantic; the evaluator sees the inner term.
        Expr::Grouped(inner) => expr_to_json(inner),
    }
}

pub fn value_to_json(v: &AstValue) -> Value {
    match v {
        AstValue::Str(s) => json!({ "kind": "string", "value": s }),
        AstValue::Ident(w) => json!({ "kind": "identifier", "value": w }),
        AstValue::Num { value, lexeme } => {
            json!({ "kind": "number", "value": value, "lexeme": lexeme })
        }
        AstValue::Map(pairs) => {
            let pairs: Vec<Value> = pairs
                .iter()
                .map(|(k, v)| json!([k, value_to_json(v)]))
                .collect();
            json!({ "kind": "map", "pairs": pairs })
        }
        AstValue::Tuple(items) => {
            let items: Vec<Value> = items.iter().map(expr_to_json).collect();
            json!({ "kind": "tuple", "items": items })
        }
    }
}

fn assertion_to_json(a: &Assertion) -> Value {
    match a {
        Assertion::ExpectedResult => json!({ "expect": "result-term" }),
        Assertion::ExpectedStdout(lines) => {
            let lines: Vec<Value> = lines.iter().map(value_to_json).collect();
            json!({ "expect": "standard-out", "lines": lines })
        }
    }
}
