// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidates get their numbers and their order.
//!
//! The key insight is that facet matches dominate everything else. The
//! budget bonus is deliberately fractional, so budget fit can break a tie
//! between equally-matching items but can never promote a worse facet match
//! above a better one.

mod core;
pub mod ranking;

pub use core::*;
