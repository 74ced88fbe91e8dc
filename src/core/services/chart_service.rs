//! Pie-chart slices derived from expense records.
//!
//! Colors are assigned by position among the expense records, so removing
//! an earlier expense shifts the color of every later slice.

use crate::domain::{ChartSlice, TransactionRecord};

pub struct ChartService;

impl ChartService {
    /// One slice per expense record, in store order. An empty result means
    /// there is nothing to chart.
    pub fn slices(records: &[TransactionRecord], palette_size: usize) -> Vec<ChartSlice> {
        let palette_size = palette_size.max(1);
        records
            .iter()
            .filter(|record| record.is_expense())
            .enumerate()
            .map(|(position, record)| ChartSlice {
                label: record.description.clone(),
                value: record.amount,
                color_index: position % palette_size,
            })
            .collect()
    }

    /// Resolves the palette token for `slice`.
    pub fn color_for<'a>(slice: &ChartSlice, palette: &'a [String]) -> Option<&'a str> {
        if palette.is_empty() {
            return None;
        }
        palette
            .get(slice.color_index % palette.len())
            .map(String::as_str)
    }
}
