pub mod events;

pub use events::{DestinationSavedEvent, SpinRecordedEvent};
