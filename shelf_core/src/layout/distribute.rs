// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primary-axis space distribution among flexible siblings.

/// Inputs to [`distribute`] for one `ByLayout` parent.
#[derive(Clone, Copy, Debug)]
pub struct DistributionInput<'a> {
    /// Interior primary-axis extent: the parent's size minus outer padding
    /// and border on both ends.
    pub available: u32,
    /// Primary-axis sizes of the visible `ByContent` children, already
    /// measured.
    pub fixed: &'a [u32],
    /// Number of visible `ByLayout` children.
    pub flexible: usize,
    /// Gap between consecutive visible children.
    pub gap: u32,
    /// Per-child cap for flexible children; `0` means uncapped.
    pub max_flexible: u32,
}

/// Result of [`distribute`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Distribution {
    /// Free space left for flexible children after fixed children and gaps.
    pub free: u32,
    /// Primary-axis size for each flexible child, in child order.
    pub sizes: Vec<u32>,
}

impl Distribution {
    /// Free space not handed to any flexible child.
    ///
    /// Zero unless the cap kicked in or there are no flexible children.
    #[must_use]
    pub fn unused(&self) -> u32 {
        let given: u64 = self.sizes.iter().map(|&s| u64::from(s)).sum();
        u32::try_from(u64::from(self.free).saturating_sub(given)).unwrap_or(0)
    }
}

/// Splits the free primary-axis space of a parent among its flexible
/// children.
///
/// The free space `F` is what remains of `available` after the fixed sizes
/// and one gap between each pair of visible children, clamped at zero. Each
/// flexible child gets `F / N`; the first `F % N` children get one extra
/// pixel so nothing is lost to rounding. When a cap is set and the even
/// share exceeds it, every flexible child gets exactly the cap and the
/// leftover space stays unused.
#[must_use]
pub fn distribute(input: &DistributionInput<'_>) -> Distribution {
    let fixed: u64 = input.fixed.iter().map(|&s| u64::from(s)).sum();
    let children = input.fixed.len() as u64 + input.flexible as u64;
    let gaps = u64::from(input.gap) * children.saturating_sub(1);
    let free = u64::from(input.available).saturating_sub(fixed + gaps);
    let free = u32::try_from(free).unwrap_or(u32::MAX);

    let n = input.flexible;
    if n == 0 {
        return Distribution {
            free,
            sizes: Vec::new(),
        };
    }

    let n32 = u32::try_from(n).unwrap_or(u32::MAX);
    let base = free / n32;
    let remainder = (free % n32) as usize;

    let sizes = if input.max_flexible > 0 && base > input.max_flexible {
        vec![input.max_flexible; n]
    } else {
        (0..n)
            .map(|i| if i < remainder { base + 1 } else { base })
            .collect()
    };

    Distribution { free, sizes }
}
