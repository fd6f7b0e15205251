//! Keyboard focus ring for the contact form

use super::field::{Field, TextField};
use super::FocusTarget;

/// Everything on the form that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusSlot {
    Input(Field),
    SubmitButton,
    ClearButton,
}

impl FocusSlot {
    /// Focus order, top to bottom
    pub const ORDER: [FocusSlot; 6] = [
        FocusSlot::Input(Field::Name),
        FocusSlot::Input(Field::Email),
        FocusSlot::Input(Field::Phone),
        FocusSlot::Input(Field::Terms),
        FocusSlot::SubmitButton,
        FocusSlot::ClearButton,
    ];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|slot| *slot == self)
            .unwrap_or(0)
    }

    pub fn text_field(self) -> Option<TextField> {
        match self {
            FocusSlot::Input(field) => TextField::try_from(field).ok(),
            _ => None,
        }
    }
}

/// Focus position on the form. `None` means nothing is focused, which is
/// where a successful submit leaves the form.
#[derive(Debug, Clone, Default)]
pub struct FocusRing {
    active: Option<usize>,
}

impl FocusRing {
    pub fn new() -> Self {
        Self { active: Some(0) }
    }

    pub fn current(&self) -> Option<FocusSlot> {
        self.active.map(|i| FocusSlot::ORDER[i])
    }

    pub fn focus(&mut self, slot: FocusSlot) {
        self.active = Some(slot.index());
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn is_focused(&self, slot: FocusSlot) -> bool {
        self.current() == Some(slot)
    }

    /// Move forward, wrapping. With nothing focused this starts at the top.
    pub fn next_field(&mut self) {
        let count = FocusSlot::ORDER.len();
        self.active = Some(self.active.map_or(0, |current| (current + 1) % count));
    }

    /// Move backward, wrapping. With nothing focused this starts at the bottom.
    pub fn prev_field(&mut self) {
        let last = FocusSlot::ORDER.len() - 1;
        self.active = Some(match self.active {
            None | Some(0) => last,
            Some(current) => current - 1,
        });
    }

    /// Apply the engine's post-submit hint. The first invalid field in
    /// focus order wins.
    pub fn apply(&mut self, target: &FocusTarget) {
        match target {
            FocusTarget::Clear => self.clear(),
            FocusTarget::Invalid(fields) => {
                if let Some(slot) = FocusSlot::ORDER
                    .into_iter()
                    .find(|slot| matches!(slot, FocusSlot::Input(f) if fields.contains(f)))
                {
                    self.focus(slot);
                }
            }
        }
    }
}
