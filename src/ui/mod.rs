//! Terminal presentation
//!
//! This module handles:
//! - Warnings on stderr (warn)
//! - The progress bar drawn while a closure installs (InstallProgressBar)
//! - Rendering of toolchains, reports and listings (via display module)

use std::fmt::Display;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use clrdeploy::deploy::{DeployedAssembly, InstallProgress};

pub mod display;

pub fn warn(message: impl Display) {
    eprintln!("{} {}", Style::new().yellow().bold().apply_to("Warning:"), message);
}

/// Progress bar over the members of a closure. Hidden when stderr is not a terminal.
#[derive(Default)]
pub struct InstallProgressBar {
    bar: Option<ProgressBar>,
}

impl InstallProgressBar {
    pub fn new() -> Self {
        Self::default()
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
    }
}

impl InstallProgress for InstallProgressBar {
    fn start(&mut self, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(Self::style());
        self.bar = Some(bar);
    }

    fn assembly(&mut self, deployed: &DeployedAssembly) {
        if let Some(bar) = &self.bar {
            bar.set_message(deployed.coordinates.artifact_id.clone());
            bar.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    fn abandon(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.abandon();
        }
    }
}
