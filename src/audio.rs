//! One-shot sound effects: asteroid explosions and player death.
//!
//! Clips are loaded once at startup into [`GameAudio`]; playback spawns a
//! transient `AudioPlayer` entity that despawns itself when the clip ends.
//! A missing audio file degrades silently — the asset server logs it once
//! and the handle simply never resolves.

use bevy::prelude::*;

/// Handles to the loaded sound clips.
#[derive(Resource, Default)]
pub struct GameAudio {
    pub explosion: Handle<AudioSource>,
    pub death: Handle<AudioSource>,
}

/// Startup system: kick off loading of both clips.
pub fn load_game_audio(mut audio: ResMut<GameAudio>, asset_server: Res<AssetServer>) {
    audio.explosion = asset_server.load("sounds/explosion.ogg");
    audio.death = asset_server.load("sounds/death.ogg");
    info!("Audio clips queued for load");
}

/// Play the asteroid explosion clip once.
pub fn play_explosion(commands: &mut Commands, audio: &GameAudio) {
    commands.spawn((
        AudioPlayer(audio.explosion.clone()),
        PlaybackSettings::DESPAWN,
    ));
}

/// Play the player death clip once.
pub fn play_death(commands: &mut Commands, audio: &GameAudio) {
    commands.spawn((AudioPlayer(audio.death.clone()), PlaybackSettings::DESPAWN));
}
