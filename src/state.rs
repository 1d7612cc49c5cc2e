//! Interaction state for the page sections.
//!
//! Everything in here is plain Rust with no reactive runtime attached. The
//! components in `app` keep one of these values inside a signal, call its
//! operations from event handlers, and render from whatever it reports.

mod contact;
mod gallery;
mod navbar;
pub mod reveal;
mod visibility;

pub use contact::{
    ContactField, ContactFieldError, ContactForm, ContactSink, ContactSubmission, FieldStatus,
    LogSink,
};
pub use gallery::{GalleryError, ModalClick, ProjectGallery};
pub use navbar::{NavbarMode, NavbarState, SCROLL_THRESHOLD};
pub use reveal::{Phase, Reveal, RevealController, Stagger, Variants};
pub use visibility::{VisibilityTracker, VISIBILITY_THRESHOLD};
