use std::fmt;

use serde::{Deserialize, Serialize};

/// The date column an update writes to. Serialized as the exact column name
/// the ESS service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "Script2_ReceiveDate")]
    Script2ReceiveDate,
    #[serde(rename = "Script2_DueDate")]
    Script2DueDate,
    #[serde(rename = "Script_DueDate")]
    ScriptDueDate,
    #[serde(rename = "Script_ReceiveDate")]
    ScriptReceiveDate,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 4] = [
        Column::Script2ReceiveDate,
        Column::Script2DueDate,
        Column::ScriptDueDate,
        Column::ScriptReceiveDate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Script2ReceiveDate => "Script2_ReceiveDate",
            Column::Script2DueDate => "Script2_DueDate",
            Column::ScriptDueDate => "Script_DueDate",
            Column::ScriptReceiveDate => "Script_ReceiveDate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Column::Script2ReceiveDate => "Script 2 Receive Date",
            Column::Script2DueDate => "Script 2 Due Date",
            Column::ScriptDueDate => "Script Due Date",
            Column::ScriptReceiveDate => "Script Receive Date",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_wire_names() {
        for column in Column::ALL {
            let json = serde_json::to_string(&column).unwrap();
            assert_eq!(json, format!("\"{}\"", column.as_str()));
        }
    }

    #[test]
    fn deserializes_wire_name() {
        let column: Column = serde_json::from_str("\"Script_DueDate\"").unwrap();
        assert_eq!(column, Column::ScriptDueDate);
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(Column::Script2ReceiveDate.label(), "Script 2 Receive Date");
        assert_eq!(Column::ScriptReceiveDate.label(), "Script Receive Date");
    }
}
