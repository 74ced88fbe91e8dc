use uuid::Uuid;

/// Entities addressed by a stable id that is never reused.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// One-line label used in list rows and log events.
pub trait Displayable {
    fn display_label(&self) -> String;
}
