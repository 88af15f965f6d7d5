use serde::{Deserialize, Serialize};
use timed_text::Seconds;

/// Operations the owning media element exposes to the transport layer.
///
/// The session never touches the element directly; a UI shell implements
/// this seam over whatever playback surface it owns.
pub trait MediaTransport {
	fn play(&mut self);
	fn pause(&mut self);
	fn set_volume(&mut self, volume: f64);
	fn set_muted(&mut self, muted: bool);
	fn seek(&mut self, position: Seconds);
	fn enter_fullscreen(&mut self);
	fn exit_fullscreen(&mut self);
}

/// Mirror of the media element's transport state.
///
/// Plain data; nothing here updates itself. [`TransportControl`] mutates it
/// in step with the commands it sends to the element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportState {
	pub playing: bool,
	pub current_time: Seconds,
	pub duration: Seconds,
	pub volume: f64,
	/// Last audible volume, restored on unmute
	pub previous_volume: f64,
	pub muted: bool,
	pub fullscreen: bool,
}

impl Default for TransportState {
	fn default() -> Self {
		Self {
			playing: false,
			current_time: 0.0,
			duration: 0.0,
			volume: 1.0,
			previous_volume: 1.0,
			muted: false,
			fullscreen: false,
		}
	}
}

impl TransportState {
	/// Volume as a 0-100 slider value
	pub fn volume_percentage(&self) -> f64 {
		self.volume * 100.0
	}

	/// Fraction of the media played so far, in `[0, 1]`
	pub fn progress(&self) -> f64 {
		if self.duration > 0.0 {
			(self.current_time / self.duration).clamp(0.0, 1.0)
		} else {
			0.0
		}
	}
}

/// Applies transport commands to a media element and keeps
/// [`TransportState`] in step
pub struct TransportControl<M> {
	media: M,
	state: TransportState,
}

impl<M: MediaTransport> TransportControl<M> {
	pub fn new(media: M) -> Self {
		Self {
			media,
			state: TransportState::default(),
		}
	}

	pub fn state(&self) -> &TransportState {
		&self.state
	}

	pub fn media(&self) -> &M {
		&self.media
	}

	pub fn toggle_play(&mut self) {
		if self.state.playing {
			self.media.pause();
		} else {
			self.media.play();
		}
		self.state.playing = !self.state.playing;
	}

	/// Set the volume, clamped to `[0, 1]`.
	///
	/// Audible volumes are remembered for unmute; zero volume mutes the
	/// element, and raising the volume while muted unmutes it.
	pub fn set_volume(&mut self, volume: f64) {
		let volume = volume.clamp(0.0, 1.0);
		self.state.volume = volume;
		self.media.set_volume(volume);

		if volume > 0.0 {
			self.state.previous_volume = volume;
		}

		if volume == 0.0 {
			self.state.muted = true;
			self.media.set_muted(true);
		} else if self.state.muted {
			self.state.muted = false;
			self.media.set_muted(false);
		}
	}

	/// Toggle mute, restoring the last audible volume (or full volume when
	/// there is none) on unmute
	pub fn toggle_mute(&mut self) {
		if self.state.muted {
			self.state.muted = false;
			self.media.set_muted(false);

			self.state.volume = if self.state.previous_volume > 0.0 { self.state.previous_volume } else { 1.0 };
			self.media.set_volume(self.state.volume);
		} else {
			self.state.previous_volume = self.state.volume;
			self.state.muted = true;
			self.media.set_muted(true);

			// Slider shows zero while muted
			self.state.volume = 0.0;
			self.media.set_volume(0.0);
		}
	}

	pub fn toggle_fullscreen(&mut self) {
		if self.state.fullscreen {
			self.media.exit_fullscreen();
		} else {
			self.media.enter_fullscreen();
		}
		self.state.fullscreen = !self.state.fullscreen;
	}

	/// Seek to a fraction of the known duration, clamped to `[0, 1]`
	pub fn seek_to_fraction(&mut self, fraction: f64) {
		let fraction = fraction.clamp(0.0, 1.0);
		let target = fraction * self.state.duration;

		self.state.current_time = target;
		self.media.seek(target);
	}

	/// Record the element's reported playback time
	pub fn report_time(&mut self, t: Seconds) {
		self.state.current_time = t;
	}

	/// Record the element's reported duration
	pub fn set_duration(&mut self, duration: Seconds) {
		self.state.duration = duration;
	}

	/// Record a play/pause flip driven by the element itself
	pub fn set_playing(&mut self, playing: bool) {
		self.state.playing = playing;
	}
}

/// Render seconds as `H:MM:SS`, or `M:SS` under an hour.
///
/// Non-finite or negative input renders as `0:00`.
pub fn format_time(seconds: Seconds) -> String {
	if !seconds.is_finite() || seconds < 0.0 {
		return "0:00".to_string();
	}

	let total = seconds as u64;
	let hours = total / 3600;
	let minutes = (total % 3600) / 60;
	let secs = total % 60;

	if hours > 0 {
		format!("{hours}:{minutes:02}:{secs:02}")
	} else {
		format!("{minutes}:{secs:02}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	// ============================================================================
	// Recording media stub
	// ============================================================================

	#[derive(Default)]
	struct RecordingMedia {
		volume: f64,
		muted: bool,
		position: Seconds,
		playing: bool,
		fullscreen: bool,
	}

	impl MediaTransport for RecordingMedia {
		fn play(&mut self) {
			self.playing = true;
		}
		fn pause(&mut self) {
			self.playing = false;
		}
		fn set_volume(&mut self, volume: f64) {
			self.volume = volume;
		}
		fn set_muted(&mut self, muted: bool) {
			self.muted = muted;
		}
		fn seek(&mut self, position: Seconds) {
			self.position = position;
		}
		fn enter_fullscreen(&mut self) {
			self.fullscreen = true;
		}
		fn exit_fullscreen(&mut self) {
			self.fullscreen = false;
		}
	}

	fn control() -> TransportControl<RecordingMedia> {
		TransportControl::new(RecordingMedia::default())
	}

	#[test]
	fn toggle_play_flips_state_and_element() {
		let mut control = control();

		control.toggle_play();
		assert!(control.state().playing);
		assert!(control.media().playing);

		control.toggle_play();
		assert!(!control.state().playing);
		assert!(!control.media().playing);
	}

	#[test]
	fn mute_remembers_and_restores_audible_volume() {
		let mut control = control();
		control.set_volume(0.4);

		control.toggle_mute();
		assert!(control.state().muted);
		assert_eq!(control.state().volume, 0.0);
		assert!(control.media().muted);

		control.toggle_mute();
		assert!(!control.state().muted);
		assert_eq!(control.state().volume, 0.4);
		assert_eq!(control.media().volume, 0.4);
	}

	#[test]
	fn unmute_with_no_audible_history_restores_full_volume() {
		let mut control = control();
		control.set_volume(0.0);
		assert!(control.state().muted);

		control.toggle_mute();
		assert_eq!(control.state().volume, 1.0);
	}

	#[test]
	fn zero_volume_mutes_and_raising_it_unmutes() {
		let mut control = control();

		control.set_volume(0.0);
		assert!(control.state().muted);
		assert!(control.media().muted);

		control.set_volume(0.6);
		assert!(!control.state().muted);
		assert_eq!(control.state().previous_volume, 0.6);
	}

	#[test]
	fn volume_is_clamped() {
		let mut control = control();

		control.set_volume(1.7);
		assert_eq!(control.state().volume, 1.0);

		control.set_volume(-0.3);
		assert_eq!(control.state().volume, 0.0);
	}

	#[test]
	fn seek_fraction_is_clamped_over_duration() {
		let mut control = control();
		control.set_duration(200.0);

		control.seek_to_fraction(0.25);
		assert_eq!(control.media().position, 50.0);

		control.seek_to_fraction(1.5);
		assert_eq!(control.media().position, 200.0);

		control.seek_to_fraction(-0.5);
		assert_eq!(control.media().position, 0.0);
	}

	#[test]
	fn fullscreen_toggles_element() {
		let mut control = control();

		control.toggle_fullscreen();
		assert!(control.state().fullscreen);
		assert!(control.media().fullscreen);

		control.toggle_fullscreen();
		assert!(!control.state().fullscreen);
	}

	#[test]
	fn progress_guards_zero_duration() {
		let mut state = TransportState::default();
		state.current_time = 30.0;
		assert_eq!(state.progress(), 0.0);

		state.duration = 120.0;
		assert_eq!(state.progress(), 0.25);
	}

	#[test]
	fn formats_times() {
		assert_eq!(format_time(0.0), "0:00");
		assert_eq!(format_time(65.0), "1:05");
		assert_eq!(format_time(600.0), "10:00");
		assert_eq!(format_time(3661.0), "1:01:01");
		assert_eq!(format_time(f64::NAN), "0:00");
		assert_eq!(format_time(-3.0), "0:00");
	}
}
