use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// The action button was activated.
    OpenEditor,
    /// The overlay asked to be removed.
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTransition {
    pub from: EditorState,
    pub to: EditorState,
    pub reason: &'static str,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("illegal editor transition: {action:?} while {state:?}")]
    Illegal {
        state: EditorState,
        action: EditorAction,
    },
}

pub fn editor_transition(
    state: EditorState,
    action: EditorAction,
) -> Result<(EditorState, StateTransition), TransitionError> {
    let (to, reason) = match (state, action) {
        (EditorState::Closed, EditorAction::OpenEditor) => {
            (EditorState::Open, "action button activated")
        }
        (EditorState::Open, EditorAction::Close) => (EditorState::Closed, "overlay closed"),
        _ => return Err(TransitionError::Illegal { state, action }),
    };
    Ok((
        to,
        StateTransition {
            from: state,
            to,
            reason,
        },
    ))
}

/// Visibility flag for the key editor overlay, owned by one tile instance.
#[derive(Debug, Clone, Default)]
pub struct EditorToggle {
    state: EditorState,
}

impl EditorToggle {
    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == EditorState::Open
    }

    /// Applies `action`. Rejected actions leave the state untouched.
    pub fn apply(&mut self, action: EditorAction) -> Result<StateTransition, TransitionError> {
        let (next, transition) = editor_transition(self.state, action)?;
        self.state = next;
        Ok(transition)
    }
}
