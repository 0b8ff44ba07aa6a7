//! Typed model access layer.
//!
//! The extraction engine reads metamodels exclusively through this module.
//! Backends in [`crate::interchange`] materialize a [`Model`]; the engine
//! navigates it with [`ObjectView`].
//!
//! ```text
//! ┌────────────┐   ┌────────────┐
//! │ .ecore/XMI │   │ hand-built │
//! └─────┬──────┘   └─────┬──────┘
//!       ▼                ▼
//! ┌──────────────────────────────┐
//! │ Model (objects + roots)      │
//! │  ObjectView: kind, name,     │
//! │  text/integer/boolean,       │
//! │  object/objects              │
//! └──────────────────────────────┘
//! ```

mod kind;
mod object;
mod view;

pub use kind::ObjectKind;
pub use object::{FeatureValue, Model, ModelObject, ObjectId, Scalar};
pub use view::{ObjectView, ShapeError, ValueShape};
