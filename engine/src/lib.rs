//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Span merge engine.
//!
//! Takes annotation spans that may overlap and splits them into an ordered list
//! of spans that never share a position. Where colored spans overlap, the
//! overlapping stretch becomes its own span carrying the blend of their colors,
//! and the remainders of the original spans keep their colors and tags.
//!
//! ```ignore
//! use markblend_engine::{Span, merge};
//!
//! let partition = merge(&[
//!     Span::new(0, 10).with_color("red"),
//!     Span::new(5, 15).with_color("blue"),
//! ])?;
//! assert_eq!(partition.spans.len(), 3);
//! assert_eq!(partition.blend_indices, vec![0, 1]);
//! ```

pub mod classify;
mod merge;
pub mod overlap;
pub mod range;
pub mod reconstruct;
mod result;
mod span;

pub use self::merge::{Merger, merge};
pub use self::result::{MergeError, MergeResult};
pub use self::span::{BlendRegion, Indexed, Partition, Span};
pub use markblend_color::{ColorBlend, MixBlend};
