//! Descriptions for symbols without a docstring of their own: module-level
//! constants, containers and instances.

use super::ParserContext;
use crate::model::{Symbol, Value};

/// Build the markdown description of an `Other` symbol.
///
/// A value summary comes first, then the symbol's own doc (or its entry in
/// the context's `extra_docs`), separated by a blank line.
pub fn describe_other(symbol: &Symbol, ctx: &ParserContext) -> String {
    let description = symbol
        .doc
        .clone()
        .or_else(|| ctx.extra_docs.get(&symbol.handle).cloned());

    let info = symbol.value.as_ref().and_then(|value| describe_value(value, ctx));

    [info, description]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn describe_value(value: &Value, ctx: &ParserContext) -> Option<String> {
    match value {
        Value::Mapping { entries } => {
            let mut entries: Vec<&(String, String)> = entries.iter().collect();
            entries.sort_by_cached_key(|(k, v)| format!("({k}, {v})"));
            let lines: Vec<String> = entries.iter().map(|(k, v)| format!(" {k}: {v}")).collect();
            Some(code_block(&lines))
        }
        Value::Set { items } => {
            let mut items: Vec<&String> = items.iter().collect();
            items.sort();
            let lines: Vec<String> = items.iter().map(|v| format!(" {v}")).collect();
            Some(code_block(&lines))
        }
        Value::Literal { repr } => Some(format!("`{}`", repr.replace('`', "\\`"))),
        Value::Property => None,
        Value::Instance {
            type_handle,
            module,
            class_name,
        } => {
            let name = ctx.reverse_index.get(type_handle).cloned().unwrap_or_else(|| {
                match module.as_deref() {
                    None | Some("builtins") => class_name.clone(),
                    Some(module) => format!("{module}.{class_name}"),
                }
            });
            Some(format!("Instance of `{name}`"))
        }
    }
}

fn code_block(lines: &[String]) -> String {
    format!("```\n{{\n{}\n}}\n```", lines.join(",\n"))
}
