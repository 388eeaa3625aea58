use leptos::prelude::*;

/// App-wide UI state shared by the chrome of the signed-in pages.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub side_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            side_open: RwSignal::new(true),
        }
    }

    pub fn toggle_side(&self) {
        self.side_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_side() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            assert!(ctx.side_open.get_untracked());
            ctx.toggle_side();
            assert!(!ctx.side_open.get_untracked());
            ctx.toggle_side();
            assert!(ctx.side_open.get_untracked());
        });
    }
}
