//! Wire types for the line-oriented command protocol.
//!
//! One request per line on stdin, one response per line on stdout, both
//! JSON with camelCase keys. The editor-side bridge decodes these shapes
//! directly into LSP structures, so field names and the numeric completion
//! kinds are part of the contract.

pub mod dispatch;
pub mod error;

use serde::{Deserialize, Serialize};

use crate::model::{Column, ColumnKind, Function, SemanticModel, Table};

/// Request envelope: `{"method": ..., "params": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Method names routed by the dispatcher.
pub mod methods {
    pub const COMPLETION: &str = "completion";
    pub const SIGNATURE_HELP: &str = "signatureHelp";
    pub const HOVER: &str = "hover";
    pub const DIAGNOSTICS: &str = "diagnostics";
    pub const SET_MODEL: &str = "setModel";
}

// ============================================================================
// Positions
// ============================================================================

/// Zero-based line/character position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

/// Ordered pair of positions, start <= end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Build a range, swapping the endpoints if they arrive out of order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }
}

// ============================================================================
// Request Parameters
// ============================================================================

/// Parameters for `completion` and `hover`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionParams {
    #[serde(default)]
    pub line: String,
    /// Cursor column; negative values clamp to 0.
    #[serde(default)]
    pub column: i64,
    /// Character offset of the line start within `full_text`.
    #[serde(default)]
    pub line_offset: i64,
    #[serde(default)]
    pub full_text: String,
}

/// Parameters for `signatureHelp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHelpParams {
    #[serde(default)]
    pub line: String,
    #[serde(default)]
    pub column: i64,
    #[serde(default)]
    pub full_text: String,
}

/// Parameters for `diagnostics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsParams {
    #[serde(default)]
    pub full_text: String,
    #[serde(default)]
    pub uri: String,
}

/// Parameters for `setModel`: the full replacement metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetModelParams {
    #[serde(default)]
    pub tables: Vec<TableDef>,
    #[serde(default)]
    pub measures: Vec<MeasureDef>,
    #[serde(default)]
    pub functions: Vec<FunctionDef>,
    /// Opaque handle owned by the excluded host layer; accepted and ignored.
    #[serde(default)]
    pub dmv_handle: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDef {
    pub name: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    pub name: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub data_type: String,
    #[serde(default)]
    pub hidden: bool,
}

/// A measure definition, scoped to its owning table by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureDef {
    pub table: String,
    pub name: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub data_type: String,
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub syntax: String,
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub category: String,
}

impl SetModelParams {
    /// Build the immutable snapshot this update describes.
    ///
    /// Measures are attached to their owning table as `ColumnKind::Measure`
    /// members; a measure naming an unknown table is dropped.
    pub fn into_model(self) -> SemanticModel {
        let mut tables: Vec<Table> = self
            .tables
            .into_iter()
            .map(|t| {
                let columns = t
                    .columns
                    .into_iter()
                    .map(|c| Column {
                        name: c.name,
                        caption: c.caption,
                        description: c.description,
                        data_type: c.data_type,
                        hidden: c.hidden,
                        table: t.name.clone(),
                        kind: ColumnKind::Column,
                    })
                    .collect();
                Table {
                    name: t.name,
                    caption: t.caption,
                    description: t.description,
                    columns,
                }
            })
            .collect();

        for m in self.measures {
            if let Some(table) = tables
                .iter_mut()
                .find(|t| t.name.eq_ignore_ascii_case(&m.table))
            {
                let owner = table.name.clone();
                table.columns.push(Column {
                    name: m.name,
                    caption: m.caption,
                    description: m.description,
                    data_type: m.data_type,
                    hidden: m.hidden,
                    table: owner,
                    kind: ColumnKind::Measure,
                });
            }
        }

        let functions = self
            .functions
            .into_iter()
            .map(|f| Function {
                name: f.name,
                description: f.description,
                syntax: f.syntax,
                parameters: f.parameters,
                category: f.category,
            })
            .collect();

        SemanticModel::new(tables, functions)
    }
}

// ============================================================================
// Completion
// ============================================================================

/// Completion item kind, transmitted as the numeric code the editor bridge
/// maps onto LSP kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    Text,
    Method,
    Function,
    Field,
    Variable,
    Class,
    Keyword,
    Operator,
}

impl CompletionKind {
    pub fn code(self) -> u8 {
        match self {
            Self::Text => 1,
            Self::Method => 2,
            Self::Function => 3,
            Self::Field => 5,
            Self::Variable => 6,
            Self::Class => 7,
            Self::Keyword => 14,
            Self::Operator => 24,
        }
    }

    /// Unrecognized codes decode as `Text`, mirroring the bridge's fallback.
    pub fn from_code(code: u8) -> Self {
        match code {
            2 => Self::Method,
            3 => Self::Function,
            5 => Self::Field,
            6 => Self::Variable,
            7 => Self::Class,
            14 => Self::Keyword,
            24 => Self::Operator,
            _ => Self::Text,
        }
    }
}

impl Serialize for CompletionKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for CompletionKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_code(u8::deserialize(deserializer)?))
    }
}

/// One completion suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    /// Exact insert-ready text, e.g. a bracketed column name.
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    pub kind: CompletionKind,
    /// Sort tier; lexically lower sorts first.
    pub sort_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_text: Option<String>,
}

/// Response for `completion`. Never paginated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResponse {
    pub items: Vec<CompletionItem>,
    pub is_incomplete: bool,
}

// ============================================================================
// Signature Help
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterInformation {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureInformation {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    pub parameters: Vec<ParameterInformation>,
}

/// Response for `signatureHelp`. Unknown functions yield zero signatures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHelpResponse {
    pub signatures: Vec<SignatureInformation>,
    pub active_signature: u32,
    pub active_parameter: u32,
}

impl SignatureHelpResponse {
    pub fn empty() -> Self {
        Self {
            signatures: Vec::new(),
            active_signature: 0,
            active_parameter: 0,
        }
    }
}

// ============================================================================
// Hover / Diagnostics / Model Update
// ============================================================================

/// Response for `hover`. Absent contents means no match, not an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}

/// A single diagnostic. The shape the bridge decodes; currently never
/// produced, since diagnostics is a reserved extension point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub range: Range,
    /// 1 = error, 2 = warning, 3 = information, 4 = hint.
    pub severity: u8,
    pub message: String,
    pub source: String,
}

/// Response for `diagnostics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsResponse {
    pub diagnostics: Vec<Diagnostic>,
}

/// Acknowledgement for `setModel`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetModelResponse {
    pub success: bool,
}

/// Degenerate response used for every request-level failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
