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

//! Color model for annotation highlights.
//!
//! Provides the parsed [`Color`] form of color descriptor strings, the
//! [`ColorBlend`] seam used by the merge engine to combine overlapping highlights,
//! and [`lumin_test`] for picking a readable foreground over a highlight.

mod blend;
mod color;
mod contrast;
mod result;

pub use self::blend::{ColorBlend, MixBlend};
pub use self::color::Color;
pub use self::contrast::{DARK_THRESHOLD, is_dark, lumin_test};
pub use self::result::{ColorError, ColorResult};
