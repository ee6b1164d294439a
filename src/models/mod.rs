//! Sample records exchanged with the receiver service.
//!
//! These types exist to give each scenario a concrete payload to send or to
//! decode into. They carry no invariants beyond field presence, and unknown
//! fields sent by the receiver are ignored.

pub mod response;
pub mod student;

pub use response::{Count, ResponseObject, ResponseObjectList, StatusObject};
pub use student::{StringListObject, Student, StudentListObject, StudentNameAndClass};
