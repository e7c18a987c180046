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

//! Highlight Merge Demonstration
//!
//! Merges a handful of overlapping entity annotations over one sentence and
//! prints the result in every color mode.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example highlight_demo
//! ```

use markblend_engine::{Span, merge};
use markblend_render::{ColorMode, MarkedText, RenderConfig};

const SENTENCE: &str = "Ada Lovelace wrote the first program for the Analytical Engine.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let spans = vec![
        Span::new(0, 12).with_tag("PER").with_color("#e6194b"),
        Span::new(4, 12).with_tag("SURNAME").with_color("#ffe119"),
        Span::new(19, 36).with_tag("WORK").with_color("#4363d8"),
        Span::new(45, 62).with_tag("MACHINE").with_color("#3cb44b"),
        Span::new(41, 62).with_tag("DESC"),
    ];

    let partition = merge(&spans)?;
    println!("Merged {} spans into {}:", spans.len(), partition.spans.len());
    for span in &partition.spans {
        println!(
            "  {:>2}..{:<2} {:<8} {:<8} {:?}",
            span.start,
            span.end,
            span.tag.as_deref().unwrap_or("-"),
            span.color.as_deref().unwrap_or("-"),
            &SENTENCE[span.range()],
        );
    }
    println!("Blended inputs: {:?}\n", partition.blend_indices);

    for mode in [
        ColorMode::None,
        ColorMode::Basic,
        ColorMode::FixedColor,
        ColorMode::TrueColor,
    ] {
        let config = RenderConfig::default().with_color_mode(mode);
        let text = MarkedText::from_partition(SENTENCE, &partition, config)?;
        println!("{:?}:\n  {}\n", mode, text);
    }

    let text = MarkedText::from_partition(SENTENCE, &partition, RenderConfig::plain())?;
    for offset in [2, 8, 50] {
        match text.selection_at(offset) {
            Some(selection) => println!(
                "Release at {} selects {}..{}",
                offset, selection.start, selection.end
            ),
            None => println!("Release at {} selects nothing", offset),
        }
    }

    Ok(())
}
