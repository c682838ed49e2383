// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rendering adapters for the two supported display shapes.

use bqm::{ScreenView, Verdict};
use bqm_domain::FormInput;
use clap::ValueEnum;
use std::io::{self, Write};

/// Display shape to render for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// Narrow, centered output for round watch faces.
    Round,
    /// Labelled rows for rectangular displays.
    Rect,
}

impl Layout {
    #[must_use]
    pub fn renderer(self) -> Box<dyn Renderer + Send> {
        match self {
            Self::Round => Box::new(RoundFace::default()),
            Self::Rect => Box::new(Rectangular),
        }
    }
}

/// Draws a [`ScreenView`] to a writer.
pub trait Renderer {
    /// Writes one full screen.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    fn render(&self, view: &ScreenView, out: &mut dyn Write) -> io::Result<()>;
}

/// Centers every line within a fixed width.
#[derive(Debug, Clone, Copy)]
pub struct RoundFace {
    width: usize,
}

impl RoundFace {
    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self { width }
    }

    fn line(&self, out: &mut dyn Write, text: &str) -> io::Result<()> {
        let len: usize = text.chars().count();
        let pad: usize = self.width.saturating_sub(len) / 2;
        writeln!(out, "{:pad$}{text}", "")
    }
}

impl Default for RoundFace {
    fn default() -> Self {
        Self::new(24)
    }
}

impl Renderer for RoundFace {
    fn render(&self, view: &ScreenView, out: &mut dyn Write) -> io::Result<()> {
        self.line(out, &"·".repeat(self.width / 2))?;
        match view {
            ScreenView::Input { form } => {
                self.line(out, &format!("Age {}", form.age()))?;
                self.line(out, &format!("Gender {}", form.gender()))?;
                self.line(out, &finish_time(form))?;
                self.line(out, "[ Check Qualification ]")?;
            }
            ScreenView::Loading { text } => {
                self.line(out, "( … )")?;
                self.line(out, text)?;
            }
            ScreenView::Result { text, .. } => {
                for part in text.lines() {
                    self.line(out, part)?;
                }
                self.line(out, "[ back ]")?;
            }
        }
        self.line(out, &"·".repeat(self.width / 2))?;
        out.flush()
    }
}

/// One labelled row per field, with the controls spelled out.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rectangular;

impl Renderer for Rectangular {
    fn render(&self, view: &ScreenView, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "+------------------------------+")?;
        match view {
            ScreenView::Input { form } => {
                writeln!(out, "  Age      {:>3}   (age+ / age-)", form.age())?;
                writeln!(out, "  Gender   {:>3}   (gender+)", form.gender())?;
                writeln!(out, "  Hours    {:>3}   (hours+ / hours-)", form.hours())?;
                writeln!(out, "  Minutes  {:>3}   (minutes+ / minutes-)", form.minutes())?;
                writeln!(out, "  Seconds  {:>3}   (seconds+ / seconds-)", form.seconds())?;
                writeln!(out, "  > submit")?;
            }
            ScreenView::Loading { text } => {
                writeln!(out, "  {text}")?;
            }
            ScreenView::Result { verdict, text } => {
                writeln!(out, "  [{}]", verdict_label(*verdict))?;
                for part in text.lines() {
                    writeln!(out, "  {part}")?;
                }
                writeln!(out, "  > back")?;
            }
        }
        writeln!(out, "+------------------------------+")?;
        out.flush()
    }
}

fn finish_time(form: &FormInput) -> String {
    format!(
        "{}:{:02}:{:02}",
        form.hours(),
        form.minutes(),
        form.seconds()
    )
}

const fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Qualified => "QUALIFIED",
        Verdict::NotQualified => "NOT QUALIFIED",
        Verdict::Error => "ERROR",
    }
}
