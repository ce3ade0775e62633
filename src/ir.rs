// Typed IR for codegen. No Value here.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    String,
    Number,
    Boolean,
    Null,
    Undefined,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::String    => "string",
            Keyword::Number    => "number",
            Keyword::Boolean   => "boolean",
            Keyword::Null      => "null",
            Keyword::Undefined => "undefined",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TsType {
    Keyword(Keyword),
    Reference(String),       // a hoisted declaration, by name
    Object(Vec<Member>),     // insertion order of the source object
    List(Box<TsType>),       // `T[]`
    Tuple(Vec<TsType>),      // exact arity
}

impl TsType {
    /// Object with at least one member; the printer breaks these over lines.
    pub fn is_multiline(&self) -> bool {
        match self {
            TsType::Object(members) => !members.is_empty(),
            TsType::List(item) => item.is_multiline(),
            TsType::Tuple(elems) => elems.iter().any(TsType::is_multiline),
            TsType::Keyword(_) | TsType::Reference(_) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub key: String,
    pub ty: TsType,
}

/// `type <name> = <ty>;`
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: String,
    pub ty: TsType,
}
