//! Infer TypeScript type declarations from a sample JSON document.
//!
//! ```
//! let src = json_to_ts::infer_type(r#"{"user": {"id": 1, "name": "x"}}"#).unwrap();
//! assert_eq!(src, "\
//! type User = {
//!   id: number;
//!   name: string;
//! };
//! type ResponseData = {
//!   user: User;
//! };
//! ");
//! ```
//!
//! Pipeline: [`loader::parse`] (relaxed JSON) → [`inference::infer_declarations`]
//! → [`codegen::render`].
pub mod codegen;
pub mod error;
pub mod inference;
pub mod ir;
pub mod loader;
pub mod naming;
pub mod options;
pub mod shape;
pub mod value;

pub use error::{InferError, InferResult};
pub use options::InferOptions;
pub use value::Value;

/// Infer declarations for `json_text` with default options.
pub fn infer_type(json_text: &str) -> InferResult<String> {
    infer_type_with(json_text, &InferOptions::default())
}

pub fn infer_type_with(json_text: &str, options: &InferOptions) -> InferResult<String> {
    let value = loader::parse(json_text)?;
    infer_value(&value, options)
}

/// Infer declarations for an already-parsed value tree.
pub fn infer_value(value: &Value, options: &InferOptions) -> InferResult<String> {
    let target = match options.pointer.as_deref() {
        Some(pointer) => value
            .pointer(pointer)
            .ok_or_else(|| InferError::PointerNotFound(pointer.to_owned()))?,
        None => value,
    };
    let decls = inference::infer_declarations(target, options);
    Ok(codegen::render(&decls, options.indent_width))
}
