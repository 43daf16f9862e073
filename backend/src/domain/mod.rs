//! Domain primitives and the user store port.
//!
//! Purpose: keep the user record, its validation rules and the store
//! contract free of transport concerns. Inbound adapters translate these
//! types to HTTP; outbound adapters hold the records.
//!
//! Public surface:
//! - `User`, `UserId`, `UserName`, `Age`: the stored record.
//! - `NewUser`, `UserPatch`, `FieldUpdate`: create and update inputs.
//! - `ValidationMode`, `UserValidationError`: the field rules.
//! - `Error`, `ErrorCode`: caller-facing error payload.
//! - `TraceId`: request correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_update;
pub mod validation;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
pub use self::user::{Age, NewUser, User, UserId, UserName};
pub use self::user_update::{Falsy, FieldUpdate, UserPatch};
pub use self::validation::{ParseValidationModeError, UserValidationError, ValidationMode};
