/// The single "universal" stream tab kept by the background page
use wasm_bindgen::prelude::*;

/// Tracks the id of the tab streams are opened in
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TabSlot {
    tab_id: Option<i32>,
}

impl TabSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tab to reuse, or `None` when a new one has to be created
    pub fn lookup(&self) -> Option<i32> {
        self.tab_id
    }

    pub fn record_created(&mut self, tab_id: i32) {
        self.tab_id = Some(tab_id);
    }

    /// Forget the tab if `removed_id` is the one being tracked
    pub fn clear_if(&mut self, removed_id: i32) -> bool {
        if self.tab_id == Some(removed_id) {
            self.tab_id = None;
            true
        } else {
            false
        }
    }
}

/// JS-facing wrapper owned by the background script
#[wasm_bindgen]
pub struct UniversalTab {
    slot: TabSlot,
}

#[wasm_bindgen]
impl UniversalTab {
    #[wasm_bindgen(constructor)]
    pub fn new() -> UniversalTab {
        UniversalTab { slot: TabSlot::new() }
    }

    /// Id of the tab to update, or undefined to create one
    pub fn lookup(&self) -> Option<i32> {
        self.slot.lookup()
    }

    #[wasm_bindgen(js_name = recordCreated)]
    pub fn record_created(&mut self, tab_id: i32) {
        log::debug!("Stream tab created: {}", tab_id);
        self.slot.record_created(tab_id);
    }

    #[wasm_bindgen(js_name = onRemoved)]
    pub fn on_removed(&mut self, tab_id: i32) -> bool {
        self.slot.clear_if(tab_id)
    }
}

impl Default for UniversalTab {
    fn default() -> Self {
        Self::new()
    }
}
