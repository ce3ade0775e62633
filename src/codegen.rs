//! Pretty-printer for the declaration IR.
//!
//! Output style:
//! - `type Name = <type>;`, one declaration after another, trailing newline;
//! - non-empty object types put each member on its own line, `{}` otherwise;
//! - tuples stay on one line unless an element breaks, in which case each
//!   element gets its own line and a trailing comma;
//! - keys that are not plain identifiers are written as string literals.
use crate::ir::{Declaration, Member, TsType};
use crate::naming::is_identifier;

pub struct Codegen {
    out: String,
    indent_width: usize,
}

impl Codegen {
    pub fn new(indent_width: usize) -> Self {
        Self { out: String::new(), indent_width }
    }

    pub fn emit(&mut self, decl: &Declaration) {
        self.out.push_str("type ");
        self.out.push_str(&decl.name);
        self.out.push_str(" = ");
        self.write_type(&decl.ty, 0);
        self.out.push_str(";\n");
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn write_type(&mut self, ty: &TsType, depth: usize) {
        match ty {
            TsType::Keyword(k) => self.out.push_str(k.as_str()),
            TsType::Reference(name) => self.out.push_str(name),
            TsType::Object(members) if members.is_empty() => self.out.push_str("{}"),
            TsType::Object(members) => {
                self.out.push_str("{\n");
                for member in members {
                    self.write_member(member, depth + 1);
                }
                self.write_indent(depth);
                self.out.push('}');
            }
            TsType::List(item) => {
                self.write_type(item, depth);
                self.out.push_str("[]");
            }
            TsType::Tuple(elems) if !ty.is_multiline() => {
                self.out.push('[');
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.write_type(elem, depth);
                }
                self.out.push(']');
            }
            TsType::Tuple(elems) => {
                self.out.push_str("[\n");
                for elem in elems {
                    self.write_indent(depth + 1);
                    self.write_type(elem, depth + 1);
                    self.out.push_str(",\n");
                }
                self.write_indent(depth);
                self.out.push(']');
            }
        }
    }

    fn write_member(&mut self, member: &Member, depth: usize) {
        self.write_indent(depth);
        if is_identifier(&member.key) {
            self.out.push_str(&member.key);
        } else {
            // JSON string syntax is a valid TS string literal
            self.out.push_str(&serde_json::Value::String(member.key.clone()).to_string());
        }
        self.out.push_str(": ");
        self.write_type(&member.ty, depth);
        self.out.push_str(";\n");
    }

    fn write_indent(&mut self, depth: usize) {
        self.out.extend(std::iter::repeat_n(' ', depth * self.indent_width));
    }
}

/// Print `decls` in order.
pub fn render(decls: &[Declaration], indent_width: usize) -> String {
    let mut cg = Codegen::new(indent_width);
    for decl in decls {
        cg.emit(decl);
    }
    cg.into_string()
}
