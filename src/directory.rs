//! Order-index maintenance for the tool collection.
//!
//! Every mutation operates on the full in-memory collection between one
//! `load()` and one `save()`. After each successful mutation the `order`
//! values form a dense permutation of `1..=N`: appending assigns the next
//! slot, moving shifts the records between the old and new position by
//! one, and deleting closes the freed slot.

use serde::{Deserialize, Serialize};
use tool_store::Tool;

/// Result alias for directory mutations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Error type for directory mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Order {requested} is out of range for {len} tools")]
    InvalidOrder { requested: u32, len: usize },
}

/// Input payload for creating a tool.
///
/// All three fields are required and must be non-empty; there is no
/// format validation beyond that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTool {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
}

/// Partial update for an existing tool.
///
/// A present `order` moves the tool; the other fields replace their
/// current values when present. The reorder is applied before the field
/// updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// Append a new tool, assigning the next id and the last order slot.
///
/// Ids are assigned as max existing numeric id + 1 and never reused after
/// deletion. A non-numeric id in the collection parses as 0 here, which
/// can collide after manual data edits; preserved as-is since the stored
/// data has always used numeric ids.
pub fn insert_tool(tools: &mut Vec<Tool>, new: NewTool) -> DirectoryResult<Tool> {
    let name = required(new.name, "name")?;
    let description = required(new.description, "description")?;
    let url = required(new.url, "url")?;

    let max_id = tools
        .iter()
        .map(|t| t.id.parse::<u64>().unwrap_or(0))
        .max()
        .unwrap_or(0);
    let max_order = tools.iter().map(|t| t.order).max().unwrap_or(0);

    let tool = Tool {
        id: (max_id + 1).to_string(),
        name,
        description,
        url,
        order: max_order + 1,
    };
    tools.push(tool.clone());
    Ok(tool)
}

fn required(value: String, field: &'static str) -> DirectoryResult<String> {
    if value.is_empty() {
        Err(DirectoryError::MissingField(field))
    } else {
        Ok(value)
    }
}

/// Move a tool to `new_order`, shifting the records in between by one.
///
/// Moving toward the front increments every other order in
/// `[new_order, current)`; moving toward the back decrements every other
/// order in `(current, new_order]`. Equivalent to removing the tool at
/// its current position and reinserting it at the target position.
/// A target equal to the current order is a no-op; a target outside
/// `1..=N` is rejected.
pub fn reorder_tool(tools: &mut [Tool], id: &str, new_order: u32) -> DirectoryResult<Tool> {
    let len = tools.len();
    let idx = tools
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| DirectoryError::NotFound(id.to_string()))?;

    if new_order < 1 || new_order as usize > len {
        return Err(DirectoryError::InvalidOrder {
            requested: new_order,
            len,
        });
    }

    let current = tools[idx].order;
    if new_order == current {
        return Ok(tools[idx].clone());
    }

    for (i, tool) in tools.iter_mut().enumerate() {
        if i == idx {
            continue;
        }
        if new_order < current {
            if tool.order >= new_order && tool.order < current {
                tool.order += 1;
            }
        } else if tool.order > current && tool.order <= new_order {
            tool.order -= 1;
        }
    }
    tools[idx].order = new_order;
    Ok(tools[idx].clone())
}

/// Apply a partial update: reorder first when `order` is present, then
/// replace any provided descriptive fields. Field updates never ripple
/// into other records' orders.
pub fn update_tool(tools: &mut [Tool], id: &str, update: ToolUpdate) -> DirectoryResult<Tool> {
    if let Some(order) = update.order {
        reorder_tool(tools, id, order)?;
    }

    let tool = tools
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| DirectoryError::NotFound(id.to_string()))?;

    if let Some(name) = update.name {
        tool.name = name;
    }
    if let Some(description) = update.description {
        tool.description = description;
    }
    if let Some(url) = update.url {
        tool.url = url;
    }

    Ok(tool.clone())
}

/// Remove a tool and close its order slot by decrementing every greater
/// order by one.
pub fn remove_tool(tools: &mut Vec<Tool>, id: &str) -> DirectoryResult<Tool> {
    let idx = tools
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| DirectoryError::NotFound(id.to_string()))?;

    let removed = tools.remove(idx);
    for tool in tools.iter_mut() {
        if tool.order > removed.order {
            tool.order -= 1;
        }
    }
    Ok(removed)
}
