//! Canonical pretty-printer.
//!
//! Produces a fixed one-space formatting so that re-parsing a rendered
//! document and rendering it again reproduces the same text. Number
//! literals render from their preserved lexeme; `Grouped` keeps its
//! parentheses; string contents are emitted verbatim (the grammar has no
//! escape mechanism, so none is applied).

use crate::ast::{Assertion, Document, Expr, Value};

pub fn render(doc: &Document) -> String {
    let mut out = String::new();
    out.push_str("general { funcon-term: ");
    out.push_str(&render_expr(&doc.program));
    out.push_str("; }\ntests {");
    for a in &doc.assertions {
        out.push(' ');
        out.push_str(&render_assertion(a));
    }
    out.push_str(" }\n");
    out
}

pub fn render_expr(e: &Expr) -> String {
    match e {
        Expr::Call { name, args } => {
            let args: Vec<String> = args.iter().map(render_expr).collect();
            format!("{}({})", name, args.join(", "))
        }
        Expr::UnaryApply { name, arg } => format!("{} {}", name, render_expr(arg)),
        Expr::Name(name) => name.clone(),
        Expr::Literal(v) => render_value(v),
        Expr::Grouped(inner) => format!("({})", render_expr(inner)),
    }
}

pub fn render_value(v: &Value) -> String {
    match v {
        Value::Str(s) => format!("\"{}\"", s),
        Value::Ident(w) => w.clone(),
        Value::Num { lexeme, .. } => lexeme.clone(),
        Value::Map(pairs) => {
            if pairs.is_empty() {
                return "{}".to_owned();
            }
            let pairs: Vec<String> = pairs
                .iter()
                .map(|(k, v)| format!("\"{}\" |-> {}", k, render_value(v)))
                .collect();
            format!("{{{}}}", pairs.join(", "))
        }
        Value::Tuple(items) => {
            let items: Vec<String> = items.iter().map(render_expr).collect();
            format!("tuple({})", items.join(", "))
        }
    }
}

fn render_assertion(a: &Assertion) -> String {
    match a {
        Assertion::ExpectedResult => "result-term: null-value;".to_owned(),
        Assertion::ExpectedStdout(lines) => {
            let lines: Vec<String> = lines.iter().map(render_value).collect();
            format!("standard-out: [{}];", lines.join(", "))
        }
    }
}
