//! Textual rendering of an additive diff onto existing source.

use super::diff::AdditiveDiff;
use super::outline::{ImportSpec, SourceOutline};

/// Insert the diff into `source` without touching any existing byte.
pub fn splice(source: &str, outline: &SourceOutline, diff: &AdditiveDiff) -> String {
    let mut merged = match import_insertion(source, outline, &diff.imports) {
        Some((at, text)) => {
            let mut out = String::with_capacity(source.len() + text.len());
            out.push_str(&source[..at]);
            out.push_str(&text);
            out.push_str(&source[at..]);
            out
        }
        None => source.to_string(),
    };

    if !diff.methods.is_empty() && !merged.ends_with('\n') {
        merged.push('\n');
    }
    for method in &diff.methods {
        merged.push('\n');
        merged.push_str(&method.text);
        merged.push('\n');
    }
    merged
}

fn import_insertion(
    source: &str,
    outline: &SourceOutline,
    imports: &[ImportSpec],
) -> Option<(usize, String)> {
    if imports.is_empty() {
        return None;
    }

    if let Some(paren) = outline.import_decls.iter().find_map(|decl| decl.closing_paren) {
        let on_own_line = source[..paren].trim_end_matches([' ', '\t']).ends_with('\n');
        let text = if on_own_line {
            imports.iter().map(|spec| format!("\t{}\n", spec.text)).collect()
        } else {
            let mut text: String =
                imports.iter().map(|spec| format!("\n\t{}", spec.text)).collect();
            text.push('\n');
            text
        };
        return Some((paren, text));
    }

    let block = import_block(imports);
    if let Some(last) = outline.import_decls.last() {
        return Some((last.span.end, format!("\n{block}")));
    }
    Some((outline.package_clause_end, format!("\n\n{block}")))
}

fn import_block(imports: &[ImportSpec]) -> String {
    let specs: String = imports.iter().map(|spec| format!("\t{}\n", spec.text)).collect();
    format!("import (\n{specs})")
}
