/// "Call us" overlay state.
///
/// Only the explicit close action hides the dialog; clicks on the backdrop
/// are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactModal {
    visible: bool,
}

impl ContactModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns true when the modal was hidden before.
    pub fn open(&mut self) -> bool {
        let changed = !self.visible;
        self.visible = true;
        changed
    }

    /// Returns true when the modal was visible before.
    pub fn close(&mut self) -> bool {
        let changed = self.visible;
        self.visible = false;
        changed
    }
}
