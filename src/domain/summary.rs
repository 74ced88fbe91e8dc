use serde::{Deserialize, Serialize};

/// Balance totals shown in the screen header and cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Summary {
    pub total: f64,
    pub income: f64,
    pub expense: f64,
}

impl Summary {
    pub fn is_negative(&self) -> bool {
        self.total < 0.0
    }
}

/// One pie-chart slice, one per expense record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
    pub color_index: usize,
}
