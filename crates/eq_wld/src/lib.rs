//! This library handles reading **WLD** scene files used by a legacy 3D engine.
//!
//! # WLD Scene Format Documentation
//!
//! A WLD file describes a zone or a collection of objects as a flat sequence of tagged records
//! called *fragments*, layered over one shared string blob. Fragments reference each other by
//! index and reference names by byte offset into the blob.
//!
//! ## File Structure
//!
//! | Offset (bytes) | Field            | Description                                       |
//! |----------------|------------------|---------------------------------------------------|
//! | 0x0000         | Magic number     | 4 bytes: 0x54503D02                               |
//! | 0x0004         | Identifier       | 4 bytes: 0x00015500 (legacy) or 0x1000C800 (modern) |
//! | 0x0008         | Fragment Count   | 4 bytes: Number of fragment records               |
//! | 0x000C         | Region Count     | 4 bytes: Number of BSP regions in the scene       |
//! | 0x0010         | Reserved         | 4 bytes                                           |
//! | 0x0014         | String Blob Size | 4 bytes: Size of the shared string blob           |
//! | 0x0018         | Reserved         | 4 bytes                                           |
//! | 0x001C         | String Blob      | Blob Size bytes of NUL-separated names            |
//!
//! ## Fragment Records
//!
//! Each fragment record is `size: u32`, `type id: i32`, then `size` bytes of payload. The size
//! field governs record boundaries on its own: a reader seeks to the declared end of every
//! record regardless of how much of the payload its decoder understood. That is what lets
//! partially modeled and entirely unknown fragment types coexist with fully modeled ones.
//!
//! Unrecognized type ids are preserved as [`Fragment::Unknown`] and reported as non-fatal
//! events on the decoded scene. The one exception is type 0x10 (skeleton hierarchy), which this
//! reader detects and refuses outright rather than risk misreading animation data.
//!
//! This crate decodes only; scenes are produced by the original tooling and never written back.

pub mod error;
pub mod fragment;
pub mod read;
pub mod types;

pub use fragment::Fragment;
pub use read::{UnknownFragment, Wld};
pub use types::{FormatVariant, StringTable};
