//! Subtitle formats the client renders itself.

use playcaps_probe::{features, Environment, ProfileOptions};

use crate::model::SubtitleProfile;
use crate::settings::{SubtitleBurnIn, UserSettings};

/// External subtitle profiles. Burn-in `All` leaves the list empty; PGS needs
/// a 2D canvas and the user's opt-in.
pub fn subtitle_profiles(
    env: &Environment,
    settings: &UserSettings,
    options: &ProfileOptions,
) -> Vec<SubtitleProfile> {
    let burn_in = settings.subtitle_burn_in;
    let mut profiles = Vec::new();

    if burn_in == SubtitleBurnIn::All {
        return profiles;
    }

    if features::supports_text_tracks(env) {
        profiles.push(SubtitleProfile::external("vtt"));
    }

    if options.enable_ssa_render && !options.is_retry && burn_in != SubtitleBurnIn::AllComplexFormats
    {
        profiles.push(SubtitleProfile::external("ass"));
        profiles.push(SubtitleProfile::external("ssa"));
    }

    if features::supports_canvas_2d(env)
        && options.enable_pgs_render
        && !options.is_retry
        && settings.subtitle_render_pgs
        && !matches!(
            burn_in,
            SubtitleBurnIn::AllComplexFormats | SubtitleBurnIn::OnlyImageFormats
        )
    {
        profiles.push(SubtitleProfile::external("pgssub"));
    }

    profiles
}
