pub mod event;
pub mod input;
pub mod press;
pub mod transform;

pub use event::{dispatch, ElementState, GestureEvent, TapLabel, WAITING_LABEL};
pub use press::PressTracker;
pub use transform::{apply_delta, Axis, AxisDrag, GestureDelta, Offset, TransformState};
