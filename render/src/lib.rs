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

//! Terminal rendering of merged annotation spans.
//!
//! Each span of a merged [`Partition`](markblend_engine::Partition) becomes a
//! [`Mark`]: its slice of the buffer painted with the span's color, followed by a
//! badge holding its tag. [`MarkedText`] renders a whole buffer, leaving text
//! between marks unstyled, and maps pointer positions back to the mark under
//! them.

mod config;
mod mark;
mod result;
mod text;

pub use self::config::{ColorMode, RenderConfig};
pub use self::mark::{Mark, Selection};
pub use self::result::{RenderError, RenderResult};
pub use self::text::{MarkedText, render};
