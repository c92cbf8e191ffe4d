//! Declaration-level view of a Go source file.

use std::ops::Range;

use tree_sitter::{Node, Parser};

use super::error::{MergeError, SourceSide};

const KIND_COMMENT: &str = "comment";
const KIND_GENERIC_TYPE: &str = "generic_type";
const KIND_IMPORT_DECLARATION: &str = "import_declaration";
const KIND_IMPORT_SPEC: &str = "import_spec";
const KIND_IMPORT_SPEC_LIST: &str = "import_spec_list";
const KIND_METHOD_DECLARATION: &str = "method_declaration";
const KIND_PACKAGE_CLAUSE: &str = "package_clause";
const KIND_PARAMETER_DECLARATION: &str = "parameter_declaration";
const KIND_PARENTHESIZED_TYPE: &str = "parenthesized_type";
const KIND_POINTER_TYPE: &str = "pointer_type";
const KIND_TYPE_IDENTIFIER: &str = "type_identifier";
const TOKEN_CLOSE_PAREN: &str = ")";

const FIELD_NAME: &str = "name";
const FIELD_PATH: &str = "path";
const FIELD_RECEIVER: &str = "receiver";
const FIELD_TYPE: &str = "type";

/// One `import` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    pub span: Range<usize>,
    /// Offset of the `)` closing a grouped declaration.
    pub closing_paren: Option<usize>,
}

/// One import spec, e.g. `corev1 "k8s.io/api/core/v1"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Unquoted import path.
    pub path: String,
    /// Verbatim spec text.
    pub text: String,
}

/// One method declaration with its attached doc comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    /// Receiver type name without pointer or type parameters.
    pub receiver: String,
    pub name: String,
    /// Verbatim text, starting at the doc comment when there is one.
    pub text: String,
}

/// Immutable summary of the top-level declarations of a Go file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceOutline {
    /// Offset just past the `package` clause.
    pub package_clause_end: usize,
    pub import_decls: Vec<ImportDecl>,
    pub imports: Vec<ImportSpec>,
    pub methods: Vec<MethodDecl>,
}

impl SourceOutline {
    /// Parse `source` and record its imports and methods.
    ///
    /// Any syntax error is fatal; the outline is never built from a
    /// partially recovered tree. A file without a package clause is
    /// rejected as well.
    pub fn parse(source: &str, side: SourceSide) -> Result<Self, MergeError> {
        let mut parser = Parser::new();
        let language: tree_sitter::Language = tree_sitter_go::LANGUAGE.into();
        parser.set_language(&language).map_err(|err| MergeError::Grammar(err.to_string()))?;

        let tree = parser.parse(source, None).ok_or(MergeError::NoTree { side })?;
        let root = tree.root_node();
        if root.has_error() {
            let at = first_error(root).start_position();
            return Err(MergeError::Parse { side, line: at.row + 1, column: at.column + 1 });
        }

        let mut outline = SourceOutline::default();
        let mut package_clause_end = None;
        let mut doc: Option<DocComment> = None;
        let mut previous_end_row: Option<usize> = None;

        let mut cursor = root.walk();
        for node in root.named_children(&mut cursor) {
            if node.kind() == KIND_COMMENT {
                let row = node.start_position().row;
                if previous_end_row == Some(row) {
                    // Trailing comment of the previous declaration.
                    continue;
                }
                doc = match doc {
                    Some(mut current) if row <= current.end_row + 1 => {
                        current.end_row = node.end_position().row;
                        Some(current)
                    }
                    _ => Some(DocComment {
                        start: node.start_byte(),
                        end_row: node.end_position().row,
                    }),
                };
                continue;
            }

            let attached = doc
                .take()
                .filter(|comment| node.start_position().row <= comment.end_row + 1)
                .map(|comment| comment.start);
            previous_end_row = Some(node.end_position().row);

            match node.kind() {
                KIND_PACKAGE_CLAUSE => package_clause_end = Some(node.end_byte()),
                KIND_IMPORT_DECLARATION => outline.record_imports(node, source),
                KIND_METHOD_DECLARATION => {
                    if let Some(method) = method_decl(node, source, attached) {
                        outline.methods.push(method);
                    }
                }
                _ => {}
            }
        }

        outline.package_clause_end =
            package_clause_end.ok_or(MergeError::MissingPackage { side })?;
        Ok(outline)
    }

    /// Names of the methods declared on `receiver`.
    pub fn method_names<'a>(&'a self, receiver: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.methods.iter().filter(move |m| m.receiver == receiver).map(|m| m.name.as_str())
    }

    fn record_imports(&mut self, decl: Node<'_>, source: &str) {
        let mut closing_paren = None;
        let mut cursor = decl.walk();
        for child in decl.named_children(&mut cursor) {
            match child.kind() {
                KIND_IMPORT_SPEC => self.imports.extend(import_spec(child, source)),
                KIND_IMPORT_SPEC_LIST => {
                    let mut list_cursor = child.walk();
                    for item in child.children(&mut list_cursor) {
                        if item.kind() == KIND_IMPORT_SPEC {
                            self.imports.extend(import_spec(item, source));
                        } else if item.kind() == TOKEN_CLOSE_PAREN {
                            closing_paren = Some(item.start_byte());
                        }
                    }
                }
                _ => {}
            }
        }
        self.import_decls.push(ImportDecl { span: decl.byte_range(), closing_paren });
    }
}

struct DocComment {
    start: usize,
    end_row: usize,
}

fn import_spec(node: Node<'_>, source: &str) -> Option<ImportSpec> {
    let path = node.child_by_field_name(FIELD_PATH)?;
    let literal = &source[path.byte_range()];
    let unquoted = literal.trim_matches(|c| c == '"' || c == '`');
    Some(ImportSpec { path: unquoted.to_string(), text: source[node.byte_range()].to_string() })
}

fn method_decl(node: Node<'_>, source: &str, doc_start: Option<usize>) -> Option<MethodDecl> {
    let name = node.child_by_field_name(FIELD_NAME)?;
    let receiver_list = node.child_by_field_name(FIELD_RECEIVER)?;
    let mut cursor = receiver_list.walk();
    let receiver = receiver_list
        .named_children(&mut cursor)
        .find(|child| child.kind() == KIND_PARAMETER_DECLARATION)?;
    let receiver_type = receiver_type_name(receiver.child_by_field_name(FIELD_TYPE)?, source)?;

    let start = doc_start.unwrap_or_else(|| node.start_byte());
    Some(MethodDecl {
        receiver: receiver_type,
        name: source[name.byte_range()].to_string(),
        text: source[start..node.end_byte()].to_string(),
    })
}

fn receiver_type_name(node: Node<'_>, source: &str) -> Option<String> {
    match node.kind() {
        KIND_TYPE_IDENTIFIER => Some(source[node.byte_range()].to_string()),
        KIND_POINTER_TYPE | KIND_PARENTHESIZED_TYPE => {
            receiver_type_name(node.named_child(0)?, source)
        }
        KIND_GENERIC_TYPE => receiver_type_name(node.child_by_field_name(FIELD_TYPE)?, source),
        _ => None,
    }
}

fn first_error(node: Node<'_>) -> Node<'_> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.is_error() || child.is_missing() {
            return child;
        }
        if child.has_error() {
            return first_error(child);
        }
    }
    node
}
