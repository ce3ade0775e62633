/// Knobs for one inference call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferOptions {
    /// Name of the declaration describing the whole document.
    pub root_name: String,
    /// Spaces per nesting level in the printed output.
    pub indent_width: usize,
    /// Suffix colliding hoisted names (`User`, `User2`) instead of emitting
    /// duplicate declarations.
    pub unique_names: bool,
    /// JSON Pointer selecting the sub-value to describe.
    pub pointer: Option<String>,
}

impl Default for InferOptions {
    fn default() -> Self {
        Self {
            root_name: String::from("ResponseData"),
            indent_width: 2,
            unique_names: false,
            pointer: None,
        }
    }
}
