//! RDM (E1.20) command frame encoding.
//!
//! Frames are assembled through `writer::FrameWriter`, a cursor that only
//! appends; offsets in `layout` are checked against the cursor in debug
//! builds. The codec is encode-only and pure: transaction numbers come from
//! a caller-owned `TransactionSequencer`, never from hidden state.
//!
//! UIDs are parsed leniently (separators and case are ignored) but input
//! with no hexadecimal digit at all is rejected rather than mapped to the
//! all-zero UID.

pub mod commands;
pub mod error;
pub mod frame;
pub mod layout;
pub mod pid;
pub mod sequencer;
pub mod uid;
pub mod writer;

pub use error::RdmError;
pub use frame::{CommandClass, RawRdmCommand, RdmCommand, ResponseType, build_frame};
pub use sequencer::TransactionSequencer;
pub use uid::{DeviceUid, discovery_range};
