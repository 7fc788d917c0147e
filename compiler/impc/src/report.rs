//! JSON encoding of execution results.
//!
//! The wire shape is one JSON array with one object per explored path:
//!
//! ```json
//! [
//!   {
//!     "values": [ { "name": "x", "value": "(x + 1)" } ],
//!     "pc": "(x < 0)",
//!     "result": "0"
//!   }
//! ]
//! ```
//!
//! All three fields carry the renderer's exact text; `values` follows the
//! function's parameter declaration order. Consumers diff this output as
//! strings, so the encoder adds nothing and reorders nothing.

use serde::Serialize;

use imp_symex::ExecutionResult;

/// One `(name, value)` binding.
#[derive(Debug, Clone, Serialize)]
pub struct Binding {
    pub name: String,
    pub value: String,
}

/// One explored path.
#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub values: Vec<Binding>,
    pub pc: String,
    pub result: String,
}

impl PathReport {
    fn from_result(result: &ExecutionResult) -> Self {
        PathReport {
            values: result
                .memory
                .bindings()
                .map(|(name, value)| Binding {
                    name: name.to_owned(),
                    value: value.to_string(),
                })
                .collect(),
            pc: result.path_condition.to_string(),
            result: result.return_value.to_string(),
        }
    }
}

/// Encode all results as one pretty-printed JSON document.
pub fn render_json(results: &[ExecutionResult]) -> serde_json::Result<String> {
    let reports: Vec<PathReport> = results.iter().map(PathReport::from_result).collect();
    serde_json::to_string_pretty(&reports)
}
