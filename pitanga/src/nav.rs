//! Screen stack and the actions buttons carry.

/// Screens that can be opened by an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Sheet,
}

/// What a button asks the app to do when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Push a new screen.
    Open(ScreenId),
    /// Pop back to the previous screen.
    Back,
    /// Log and show a status message; used by the placeholder analyses.
    Notify(&'static str),
    /// Open the file browser on the current screen.
    ChooseFile,
    /// Analyse the chosen file on the current screen.
    Analyse,
}

/// Stack of open screens. The root pushed at construction is never popped.
#[derive(Debug)]
pub struct NavStack<S> {
    screens: Vec<S>,
}

impl<S> NavStack<S> {
    pub fn new(root: S) -> Self {
        Self { screens: vec![root] }
    }

    pub fn push(&mut self, screen: S) {
        self.screens.push(screen);
    }

    /// Remove the top screen, unless it is the root.
    pub fn pop(&mut self) -> Option<S> {
        if self.screens.len() > 1 {
            self.screens.pop()
        } else {
            None
        }
    }

    pub fn current(&self) -> &S {
        &self.screens[self.screens.len() - 1]
    }

    pub fn current_mut(&mut self) -> &mut S {
        let top = self.screens.len() - 1;
        &mut self.screens[top]
    }

    pub fn depth(&self) -> usize {
        self.screens.len()
    }
}
