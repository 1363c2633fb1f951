use crate::common::types::DistributionMode;

/// One `(index, base)` slot per link of a numbered kind, in emission order.
pub fn distribute(bases: &[String], quantity: u32, mode: DistributionMode) -> Vec<(u32, &str)> {
    match mode {
        DistributionMode::Cyclic => cyclic(bases, quantity),
        DistributionMode::Multiplicative => multiplicative(bases, quantity),
    }
}

/// `quantity` slots in total, bases taken round-robin.
fn cyclic(bases: &[String], quantity: u32) -> Vec<(u32, &str)> {
    if bases.is_empty() {
        return Vec::new();
    }

    (1..=quantity)
        .map(|i| {
            let base = &bases[(i as usize - 1) % bases.len()];
            (i, base.as_str())
        })
        .collect()
}

/// `quantity` slots for every base; the index restarts per base.
fn multiplicative(bases: &[String], quantity: u32) -> Vec<(u32, &str)> {
    bases
        .iter()
        .flat_map(|base| (1..=quantity).map(move |i| (i, base.as_str())))
        .collect()
}
