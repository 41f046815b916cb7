// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking pipeline: where all the pieces meet.
//!
//! Diagnostics, matching, scoring, and ordering are each pure on their own;
//! this module composes them into the one operation callers see. The only
//! policy that lives here is the keep-gate and the two-phase budget
//! relaxation - everything else is delegated.

mod pipeline;

pub use pipeline::*;
