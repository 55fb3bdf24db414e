//! Dependency match policies
//!
//! Policies are predicates over [`DependencyDescriptor`]s. A list of policies
//! matches only when every policy matches.

use super::{ArtifactType, DependencyDescriptor};
use crate::vendor::non_blank;

pub trait MatchPolicy {
    fn matches(&self, dependency: &DependencyDescriptor) -> bool;
}

/// Dependencies that apply to a profile.
///
/// A dependency without a profile applies everywhere. One with a profile
/// matches only the same profile, and never when no profile is requested.
#[derive(Debug, Clone)]
pub struct ProfileMatch {
    profile: Option<String>,
}

impl ProfileMatch {
    pub fn new(profile: Option<&str>) -> Self {
        Self {
            profile: profile.map(str::to_string),
        }
    }
}

impl MatchPolicy for ProfileMatch {
    fn matches(&self, dependency: &DependencyDescriptor) -> bool {
        let Some(required) = non_blank(dependency.profile.as_deref()) else {
            return true;
        };
        self.profile.as_deref() == Some(required)
    }
}

/// Executables, platform plugins and IDE add-ins
#[derive(Debug, Clone, Copy, Default)]
pub struct KindMatch;

impl KindMatch {
    const KINDS: [ArtifactType; 4] = [
        ArtifactType::Exe,
        ArtifactType::NetPlugin,
        ArtifactType::VisualStudioAddin,
        ArtifactType::SharpDevelopAddin,
    ];
}

impl MatchPolicy for KindMatch {
    fn matches(&self, dependency: &DependencyDescriptor) -> bool {
        dependency
            .coordinates
            .kind()
            .is_ok_and(|kind| Self::KINDS.contains(&kind))
    }
}

/// Dependencies whose GAC-install flag equals the expected value
#[derive(Debug, Clone, Copy)]
pub struct GacFlagMatch {
    expected: bool,
}

impl GacFlagMatch {
    pub fn new(expected: bool) -> Self {
        Self { expected }
    }
}

impl MatchPolicy for GacFlagMatch {
    fn matches(&self, dependency: &DependencyDescriptor) -> bool {
        dependency.gac_install == self.expected
    }
}

/// True when every policy matches
pub fn matches_all(policies: &[&dyn MatchPolicy], dependency: &DependencyDescriptor) -> bool {
    policies.iter().all(|p| p.matches(dependency))
}

/// Dependencies accepted by all policies, in input order
pub fn filter<'a>(
    policies: &[&dyn MatchPolicy],
    dependencies: &'a [DependencyDescriptor],
) -> Vec<&'a DependencyDescriptor> {
    dependencies
        .iter()
        .filter(|d| matches_all(policies, d))
        .collect()
}
