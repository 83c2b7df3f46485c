// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Release policy module.
//!
//! This module computes version bumps and changelog sections from
//! commit batches, and renders release notes.

mod notes;
mod policy;

pub use notes::NotesRenderer;
pub use policy::{next_version, CommitRecord, ReleaseDecision, ReleasePolicy, Section, SectionEntry};
