use std::cell::Cell;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ButtonVisual {
    #[default]
    Normal,
    Hover,
}
impl ButtonVisual {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Hover => "hover",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PointerEvent {
    Enter,
    Leave,
}

/// Pointer-driven visual state of a single button. Purely cosmetic.
#[derive(Debug, Default)]
pub struct HoverState {
    visual: Cell<ButtonVisual>,
}
impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn visual(&self) -> ButtonVisual {
        self.visual.get()
    }
    pub fn enter(&self) -> ButtonVisual {
        self.visual.set(ButtonVisual::Hover);
        self.visual()
    }
    pub fn leave(&self) -> ButtonVisual {
        self.visual.set(ButtonVisual::Normal);
        self.visual()
    }
    /// Applies a pointer event and returns the classes the button should carry
    pub fn on_pointer(&self, event: PointerEvent) -> [&'static str; 2] {
        match event {
            PointerEvent::Enter => self.enter(),
            PointerEvent::Leave => self.leave(),
        };
        self.css_classes()
    }
    /// CSS classes a button in this state carries
    pub fn css_classes(&self) -> [&'static str; 2] {
        ["action", self.visual().css_class()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_leave_swap_the_visual() {
        let state = HoverState::new();
        assert_eq!(state.visual(), ButtonVisual::Normal);
        assert_eq!(state.enter(), ButtonVisual::Hover);
        assert_eq!(state.css_classes(), ["action", "hover"]);
        // repeated enter events keep the hover look
        assert_eq!(state.enter(), ButtonVisual::Hover);
        assert_eq!(state.leave(), ButtonVisual::Normal);
        assert_eq!(state.css_classes(), ["action", "normal"]);
    }

    #[test]
    fn pointer_events_only_change_the_visual_classes() {
        let state = HoverState::new();
        assert_eq!(state.on_pointer(PointerEvent::Enter), ["action", "hover"]);
        assert_eq!(state.on_pointer(PointerEvent::Leave), ["action", "normal"]);
        assert_eq!(state.on_pointer(PointerEvent::Leave), ["action", "normal"]);
        assert_eq!(state.visual(), ButtonVisual::Normal);
    }
}
