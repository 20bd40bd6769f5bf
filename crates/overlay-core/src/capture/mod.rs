mod capture_state;
mod session;

pub use {
    capture_state::CaptureState,
    session::{BindingCallback, HotkeyCaptureSession, RECORDING_PLACEHOLDER},
};
