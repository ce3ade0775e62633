//! Type generation: walk a value tree and produce TypeScript declarations.
//!
//! Every recursive call returns the type to write at its own position together
//! with the declarations it hoisted on the way. Callers append their own
//! hoisted declaration after those of their children, so the merged list
//! always declares a name before the declaration that first uses it.
//!
//! Decisions:
//! - Objects bound to a (non-empty) property key are hoisted into
//!   `type <Key> = {...}` and referenced by name; the root object and objects
//!   sitting inside arrays are inlined.
//! - Arrays are lists when every consecutive pair of elements has the same
//!   shape, tuples otherwise. There is no majority vote.
//! - A list of objects bound to a property key hoists its element type as
//!   `<Key>Item`.
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::ir::{Declaration, Keyword, Member, TsType};
use crate::naming::{type_name, NameTable};
use crate::options::InferOptions;
use crate::shape::{classify_slot, is_homogeneous};
use crate::value::Value;

const ITEM_SUFFIX: &str = "Item";

// ------------------------------- Context ---------------------------------- //

/// Where a value sits relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding<'a> {
    /// The document itself.
    Root,
    /// Value of an object member with this key.
    Property(&'a str),
    /// Element of an array (list or tuple).
    Element,
}

impl<'a> Binding<'a> {
    /// Key usable for minting a hoisted name.
    fn hoist_key(self) -> Option<&'a str> {
        match self {
            Binding::Property(key) if !key.is_empty() => Some(key),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub ty: TsType,
    pub hoisted: Vec<Declaration>,
}

impl Generated {
    fn leaf(keyword: Keyword) -> Self {
        Self { ty: TsType::Keyword(keyword), hoisted: Vec::new() }
    }
}

// ------------------------------- Generate --------------------------------- //

pub struct Inferrer {
    names: NameTable,
}

impl Inferrer {
    pub fn new(options: &InferOptions) -> Self {
        let mut names = NameTable::new(options.unique_names);
        names.reserve(&options.root_name);
        Self { names }
    }

    /// `None` stands for a missing value and yields `undefined`.
    pub fn generate(&mut self, value: Option<&Value>, binding: Binding<'_>) -> Generated {
        match value {
            Some(Value::Object(map)) => self.generate_object(map, binding),
            Some(Value::Array(xs))   => self.generate_array(xs, binding),
            Some(Value::String(_))   => Generated::leaf(Keyword::String),
            Some(Value::Number(_))   => Generated::leaf(Keyword::Number),
            Some(Value::Bool(_))     => Generated::leaf(Keyword::Boolean),
            Some(Value::Null)        => Generated::leaf(Keyword::Null),
            None                     => Generated::leaf(Keyword::Undefined),
        }
    }

    fn generate_object(&mut self, map: &IndexMap<String, Value>, binding: Binding<'_>) -> Generated {
        let mut hoisted = Vec::new();
        let mut members = Vec::with_capacity(map.len());
        for (key, value) in map {
            let child = self.generate(Some(value), Binding::Property(key));
            hoisted.extend(child.hoisted);
            members.push(Member { key: key.clone(), ty: child.ty });
        }
        let body = TsType::Object(members);

        match binding.hoist_key() {
            Some(key) => {
                let name = self.names.claim(type_name(key));
                let ty = hoist(&mut hoisted, name, body);
                Generated { ty, hoisted }
            }
            None => Generated { ty: body, hoisted },
        }
    }

    fn generate_array(&mut self, xs: &[Value], binding: Binding<'_>) -> Generated {
        if !is_homogeneous(xs) {
            let mut hoisted = Vec::new();
            let mut elems = Vec::with_capacity(xs.len());
            for x in xs {
                let child = self.generate(Some(x), Binding::Element);
                hoisted.extend(child.hoisted);
                elems.push(child.ty);
            }
            return Generated { ty: TsType::Tuple(elems), hoisted };
        }

        let first = xs.first();
        let Generated { ty, mut hoisted } = self.generate(first, Binding::Element);
        let item = match binding.hoist_key() {
            Some(key) if classify_slot(first).is_object() => {
                let name = self.names.claim(format!("{}{ITEM_SUFFIX}", type_name(key)));
                hoist(&mut hoisted, name, ty)
            }
            _ => ty,
        };
        Generated { ty: TsType::List(Box::new(item)), hoisted }
    }
}

/// Push `type <name> = <ty>` and return the reference to it.
fn hoist(hoisted: &mut Vec<Declaration>, name: String, ty: TsType) -> TsType {
    trace!(%name, "hoisting declaration");
    let reference = TsType::Reference(name.clone());
    hoisted.push(Declaration { name, ty });
    reference
}

// ------------------------------- Front API -------------------------------- //

/// All declarations for `root`: hoisted ones first, the root declaration
/// (named by `options.root_name`) last.
pub fn infer_declarations(root: &Value, options: &InferOptions) -> Vec<Declaration> {
    let mut inferrer = Inferrer::new(options);
    let Generated { ty, mut hoisted } = inferrer.generate(Some(root), Binding::Root);
    debug!(root = %options.root_name, hoisted = hoisted.len(), "inferred declarations");
    hoisted.push(Declaration { name: options.root_name.clone(), ty });
    hoisted
}

// ------------------------------- Tests ------------------------------------ //
