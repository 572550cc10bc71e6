//! Color registry: bounded cache from 24-bit colors to palette hardware.
//!
//! A limited-palette terminal exposes a fixed number of color slots and a
//! fixed number of color pairs (foreground slot + background slot). The
//! registry hands out both on demand and remembers every allocation so a
//! color or pair is registered with the hardware exactly once.
//!
//! ```text
//!   resolve(fg, bg)
//!        │
//!        ├── pairs[(fg, bg)] hit ──────────────────────────────▶ PairId
//!        │
//!        └── miss ─▶ slots[fg] / slots[bg] (allocate on miss)
//!                         │
//!                         └─▶ next pair id ─▶ define_pair ─────▶ PairId
//! ```
//!
//! Growth is monotonic: nothing is evicted and a slot is never reassigned.

use super::spec::{ColorSpec, ScaledColor};
use crate::error::{RenderError, Result};
use std::collections::HashMap;

/// Index of a hardware color slot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct SlotId(pub u16);

/// Index of a hardware color pair. This is the cell backend's attribute handle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct PairId(pub u16);

impl PairId {
    /// The terminal's own default colors. Never allocated by the registry.
    pub const DEFAULT: Self = Self(0);
}

/// Hardware side of the registry: where allocations are registered.
pub trait Palette {
    /// Program a color slot with a 0-1000 scaled color.
    fn define_color(&mut self, slot: SlotId, color: ScaledColor) -> Result<()>;

    /// Program a pair as the combination of two color slots.
    fn define_pair(&mut self, pair: PairId, fg: SlotId, bg: SlotId) -> Result<()>;
}

/// Configuration for the registry's slot numbering and ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryLimits {
    /// Total number of color slots the hardware has (slot ids `0..color_slots`).
    pub color_slots: u16,
    /// Total number of pairs the hardware has (pair ids `0..pair_slots`).
    pub pair_slots: u16,
    /// First slot the registry may allocate; lower slots are the base colors.
    pub first_color_slot: u16,
    /// First pair the registry may allocate; pair 0 is the terminal default.
    pub first_pair: u16,
}

impl Default for RegistryLimits {
    fn default() -> Self {
        Self {
            color_slots: 256,
            pair_slots: 256,
            first_color_slot: 8,
            first_pair: 1,
        }
    }
}

/// The eight base terminal colors in slot order.
pub const BASE_COLORS: [ColorSpec; 8] = [
    ColorSpec::BLACK,
    ColorSpec::RED,
    ColorSpec::GREEN,
    ColorSpec::YELLOW,
    ColorSpec::BLUE,
    ColorSpec::MAGENTA,
    ColorSpec::CYAN,
    ColorSpec::WHITE,
];

/// Bounded, append-only cache of color slots and color pairs.
#[derive(Debug, Clone)]
pub struct ColorRegistry {
    limits: RegistryLimits,
    /// Color value to allocated slot.
    slots: HashMap<ColorSpec, SlotId>,
    /// (fg, bg) value pair to allocated pair id.
    pairs: HashMap<(ColorSpec, ColorSpec), PairId>,
    /// Reverse table: `pair_colors[id - first_pair]`.
    pair_colors: Vec<(ColorSpec, ColorSpec)>,
    next_slot: u16,
    next_pair: u16,
}

impl ColorRegistry {
    /// Create an empty registry.
    ///
    /// Fails if the first allocatable slot or pair already sits at or beyond
    /// the ceiling.
    pub fn new(limits: RegistryLimits) -> Result<Self> {
        if limits.first_color_slot >= limits.color_slots {
            return Err(RenderError::Config(format!(
                "first color slot {} leaves no room under the {} slot ceiling",
                limits.first_color_slot, limits.color_slots
            )));
        }
        if limits.first_pair == 0 || limits.first_pair >= limits.pair_slots {
            return Err(RenderError::Config(format!(
                "first pair {} must be in 1..{}",
                limits.first_pair, limits.pair_slots
            )));
        }

        Ok(Self {
            limits,
            slots: HashMap::new(),
            pairs: HashMap::new(),
            pair_colors: Vec::new(),
            next_slot: limits.first_color_slot,
            next_pair: limits.first_pair,
        })
    }

    /// The limits this registry was built with.
    #[inline]
    pub const fn limits(&self) -> RegistryLimits {
        self.limits
    }

    /// Number of color slots allocated so far.
    #[inline]
    pub fn color_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of pairs allocated so far.
    #[inline]
    pub fn pair_count(&self) -> usize {
        self.pair_colors.len()
    }

    /// Slot allocated for `color`, if any.
    #[inline]
    pub fn slot_of(&self, color: ColorSpec) -> Option<SlotId> {
        self.slots.get(&color).copied()
    }

    /// Pair allocated for `(fg, bg)`, if any. Never allocates.
    #[inline]
    pub fn lookup(&self, fg: ColorSpec, bg: ColorSpec) -> Option<PairId> {
        self.pairs.get(&(fg, bg)).copied()
    }

    /// Colors a pair was allocated for.
    pub fn pair_colors(&self, pair: PairId) -> Option<(ColorSpec, ColorSpec)> {
        let index = pair.0.checked_sub(self.limits.first_pair)?;
        self.pair_colors.get(usize::from(index)).copied()
    }

    /// Program the base slots with their nominal colors.
    ///
    /// Terminals often ship the base colors as approximations (a "black"
    /// that is really dark grey). Only slots below `first_color_slot` are
    /// touched, so allocations are unaffected.
    pub fn install_base_colors<P: Palette + ?Sized>(&self, palette: &mut P) -> Result<()> {
        let count = usize::from(self.limits.first_color_slot).min(BASE_COLORS.len());
        for (slot, color) in BASE_COLORS.iter().take(count).enumerate() {
            palette.define_color(SlotId(slot as u16), color.scaled())?;
        }
        Ok(())
    }

    /// Map `(fg, bg)` to a hardware pair, allocating whatever is missing.
    ///
    /// Repeated calls with the same colors return the same pair and touch
    /// neither the registry nor the palette. If either ceiling would be
    /// exceeded the call fails and the registry is left exactly as it was.
    pub fn resolve<P: Palette + ?Sized>(
        &mut self,
        fg: ColorSpec,
        bg: ColorSpec,
        palette: &mut P,
    ) -> Result<PairId> {
        if let Some(pair) = self.lookup(fg, bg) {
            return Ok(pair);
        }

        // Check both ceilings before mutating anything.
        let mut new_colors = 0u16;
        if !self.slots.contains_key(&fg) {
            new_colors += 1;
        }
        if fg != bg && !self.slots.contains_key(&bg) {
            new_colors += 1;
        }
        if u32::from(self.next_slot) + u32::from(new_colors) > u32::from(self.limits.color_slots) {
            log::warn!(
                "refusing {fg}/{bg}: {} of {} color slots in use",
                self.next_slot,
                self.limits.color_slots
            );
            return Err(RenderError::ColorSlotsExhausted {
                limit: self.limits.color_slots,
            });
        }
        if self.next_pair >= self.limits.pair_slots {
            log::warn!(
                "refusing {fg}/{bg}: all {} color pairs in use",
                self.limits.pair_slots
            );
            return Err(RenderError::PairSlotsExhausted {
                limit: self.limits.pair_slots,
            });
        }

        let fg_slot = self.slot_for(fg, palette)?;
        let bg_slot = self.slot_for(bg, palette)?;

        let pair = PairId(self.next_pair);
        palette.define_pair(pair, fg_slot, bg_slot)?;
        self.next_pair += 1;
        self.pairs.insert((fg, bg), pair);
        self.pair_colors.push((fg, bg));

        log::debug!("pair {} = {fg} on {bg} (slots {}, {})", pair.0, fg_slot.0, bg_slot.0);
        Ok(pair)
    }

    /// Existing slot for `color`, or the next free one registered with the palette.
    fn slot_for<P: Palette + ?Sized>(&mut self, color: ColorSpec, palette: &mut P) -> Result<SlotId> {
        if let Some(slot) = self.slot_of(color) {
            return Ok(slot);
        }

        let slot = SlotId(self.next_slot);
        palette.define_color(slot, color.scaled())?;
        self.next_slot += 1;
        self.slots.insert(color, slot);

        log::debug!("slot {} = {color}", slot.0);
        Ok(slot)
    }
}
