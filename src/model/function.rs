//! Function metadata.

/// A global (not table-scoped) function known to the model.
///
/// Functions carry exactly one signature; there is no overloading.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub description: String,
    /// Syntax template, e.g. `SUM(<column>)`. May be empty.
    pub syntax: String,
    /// Parameter names in declaration order.
    pub parameters: Vec<String>,
    /// Category tag ("AGGREGATION", "FILTER", ...). May be empty.
    pub category: String,
}

impl Function {
    /// Label shown in signature help: the syntax template when present,
    /// otherwise derived from name and parameters.
    pub fn signature_label(&self) -> String {
        if self.syntax.is_empty() {
            format!("{}({})", self.name, self.parameters.join(", "))
        } else {
            self.syntax.clone()
        }
    }
}
