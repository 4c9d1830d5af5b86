use crate::types::{Instance, Result, SolverError};

/// ceil(sum of areas / W): the trivial area-based lower bound on height.
pub fn continuous_bound(instance: &Instance) -> Result<u64> {
    let mut total_area: u64 = 0;
    for item in &instance.items {
        total_area = total_area
            .checked_add(item.area())
            .ok_or(SolverError::NumericOverflow)?;
    }
    let w = instance.strip_width as u64;
    Ok(total_area.div_ceil(w))
}

/// The Martello-Vigo "first bound": for each alpha in [1, W/2], split items
/// into three classes by width and derive a tighter lower bound than the
/// continuous bound from how much of J3's area can't be absorbed by the
/// slack in J2. Returns the maximum over all alpha.
pub fn first_bound(instance: &Instance) -> Result<u64> {
    let w = instance.strip_width as u64;
    let half = w / 2;

    let mut best: u64 = 0;
    for alpha in 1..=half {
        let mut t: u64 = 0;
        let mut a: u64 = 0;
        let mut b: u64 = 0;

        for item in &instance.items {
            let wi = item.width as u64;
            let hi = item.height as u64;
            if wi < alpha {
                continue;
            }
            if wi > w.saturating_sub(alpha) {
                // J1
                t = t.checked_add(hi).ok_or(SolverError::NumericOverflow)?;
            } else if wi > half {
                // J2
                t = t.checked_add(hi).ok_or(SolverError::NumericOverflow)?;
                let slack = w.checked_sub(wi).ok_or(SolverError::NumericOverflow)?;
                b = b
                    .checked_add(slack.checked_mul(hi).ok_or(SolverError::NumericOverflow)?)
                    .ok_or(SolverError::NumericOverflow)?;
            } else {
                // J3
                a = a
                    .checked_add(wi.checked_mul(hi).ok_or(SolverError::NumericOverflow)?)
                    .ok_or(SolverError::NumericOverflow)?;
            }
        }

        if a > b {
            t = t
                .checked_add((a - b).div_ceil(w))
                .ok_or(SolverError::NumericOverflow)?;
        }

        best = best.max(t);
    }

    Ok(best)
}
