//! Line item aggregation.

use crate::line_item::LineItem;

/// Sum of `quantity × rate` over `items`, at full precision.
///
/// Rounding to paise is a display concern; nothing here rounds.
pub fn subtotal<'a, I>(items: I) -> f64
where
    I: IntoIterator<Item = &'a LineItem>,
{
    items
        .into_iter()
        .fold(0.0, |total, item| total + item.amount())
}
