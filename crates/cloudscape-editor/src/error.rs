/// Errors raised by the camera animator and its dialog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditorError {
    #[error("tick bus is not accepting handlers")]
    TickBusUnavailable,

    #[error("no active viewport camera")]
    CameraUnavailable,

    #[error("invalid {axis} value '{text}': {reason}")]
    InvalidInput {
        axis: char,
        text: String,
        reason: String,
    },
}
