use std::fmt;

/// Caller contract violations caught while composing.
///
/// Only reported under [`ReferencePolicy::Strict`](super::ReferencePolicy::Strict);
/// the lenient policy logs and degrades instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// A layer references a gradient id that no definition declares.
    UnknownGradient { layer: usize, id: String },
    /// Two gradient definitions share an id.
    DuplicateGradient { id: String },
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::UnknownGradient { layer, id } => {
                write!(f, "layer {layer} references unknown gradient {id:?}")
            }
            ComposeError::DuplicateGradient { id } => write!(f, "gradient {id:?} is defined more than once"),
        }
    }
}

impl std::error::Error for ComposeError {}
