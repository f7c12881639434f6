//! Core wizard types.
//!
//! This module contains the declarative description of a wizard and the
//! plain state it accumulates:
//! - Field and step descriptors, immutable once a wizard is built
//! - The form data and field error maps
//! - The mutable `WizardState` owned by a controller
//! - Immutable navigation history
//!
//! Nothing in here performs I/O. Mutation of `WizardState` is reserved to
//! the controller.

mod field;
mod history;
mod state;
mod step;
mod value;

pub use field::{FieldDescriptor, FieldKind, SelectOption};
pub use history::{NavigationHistory, StepTransition, Trigger};
pub use state::WizardState;
pub use step::StepDescriptor;
pub use value::{is_blank, value_text, FieldErrors, FormData};
