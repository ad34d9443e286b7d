// SPDX-License-Identifier: MPL-2.0
pub mod dot_ring;

pub use dot_ring::DotRing;
