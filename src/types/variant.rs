//! Create/update markers for payloads that share one field set
//!
//! A user or bank account payload carries the same fields whether it creates
//! the resource or patches it. The marker decides which validator applies:
//! [`Create`] makes a subset of fields mandatory, [`Update`] treats every field
//! as optional and only checks the ones that are set.

mod sealed {
    pub trait Sealed {}
}

/// Payload variant marker
pub trait Variant: sealed::Sealed + Default + Clone + Copy + Send + Sync + 'static {}

/// Marker for payloads that create a resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Create;

/// Marker for payloads that patch an existing resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Update;

impl sealed::Sealed for Create {}
impl sealed::Sealed for Update {}
impl Variant for Create {}
impl Variant for Update {}
