use std::fmt::Write as _;
use std::path::Path;

use leadq_scoring::{builtin_profiles, load_profiles, WeightingProfile};

/// Print built-in profiles followed by any defined in `profiles_file`.
///
/// # Errors
///
/// Returns an error if the profiles file cannot be loaded.
pub(crate) fn run_profiles(profiles_file: Option<&Path>) -> anyhow::Result<()> {
    let mut profiles = builtin_profiles()?;
    if let Some(path) = profiles_file {
        let from_file = load_profiles(path)?;
        profiles.retain(|p| {
            !from_file
                .iter()
                .any(|f| f.name().eq_ignore_ascii_case(p.name()))
        });
        profiles.extend(from_file);
    }
    print!("{}", render_profiles(&profiles));
    Ok(())
}

pub(crate) fn render_profiles(profiles: &[WeightingProfile]) -> String {
    let mut out = String::new();
    for profile in profiles {
        let thresholds = profile.thresholds();
        let _ = writeln!(
            out,
            "{} [{}] high>={} medium>={}",
            profile.name(),
            profile.strategy(),
            thresholds.high,
            thresholds.medium
        );
        for (dimension, weight) in profile.weights() {
            let _ = writeln!(out, "  {:<22}{weight:.2}", dimension.key());
        }
    }
    out
}
