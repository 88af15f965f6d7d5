use std::sync::{Arc, Mutex, PoisonError, Weak};

use crate::transport::{MediaTransport, TransportControl};

/// Volume change applied per arrow-key press
const VOLUME_STEP: f64 = 0.1;

/// Transport actions reachable from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
	TogglePlay,
	VolumeUp,
	VolumeDown,
	ToggleMute,
	ToggleFullscreen,
}

/// The standard key map (YouTube-style bindings)
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
	match key {
		" " | "k" => Some(KeyCommand::TogglePlay),
		"ArrowUp" => Some(KeyCommand::VolumeUp),
		"ArrowDown" => Some(KeyCommand::VolumeDown),
		"m" => Some(KeyCommand::ToggleMute),
		"f" => Some(KeyCommand::ToggleFullscreen),
		_ => None,
	}
}

impl<M: MediaTransport> TransportControl<M> {
	/// Apply a keyboard command to the transport
	pub fn apply_command(&mut self, command: KeyCommand) {
		match command {
			KeyCommand::TogglePlay => self.toggle_play(),
			KeyCommand::VolumeUp => self.set_volume(self.state().volume + VOLUME_STEP),
			KeyCommand::VolumeDown => self.set_volume(self.state().volume - VOLUME_STEP),
			KeyCommand::ToggleMute => self.toggle_mute(),
			KeyCommand::ToggleFullscreen => self.toggle_fullscreen(),
		}
	}
}

#[derive(Default)]
struct BindingTable {
	next_id: u64,
	bindings: Vec<(u64, String, KeyCommand)>,
}

/// Live key bindings for one mounted playback surface.
///
/// Each registration returns a guard; dropping the guard removes the
/// binding, so tearing down a session cannot leave handlers attached. The
/// set itself is cheap to clone and share with whatever layer dispatches raw
/// key events.
#[derive(Clone, Default)]
pub struct KeyBindingSet {
	inner: Arc<Mutex<BindingTable>>,
}

impl KeyBindingSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a binding; it stays active until the returned guard drops
	pub fn bind(&self, key: impl Into<String>, command: KeyCommand) -> KeyBindingGuard {
		let mut table = self.lock();
		let id = table.next_id;
		table.next_id += 1;
		table.bindings.push((id, key.into(), command));

		KeyBindingGuard {
			table: Arc::downgrade(&self.inner),
			id,
		}
	}

	/// Register the standard key map, returning one guard per binding
	pub fn bind_defaults(&self) -> Vec<KeyBindingGuard> {
		[" ", "k", "ArrowUp", "ArrowDown", "m", "f"]
			.iter()
			.copied()
			.filter_map(|key| command_for_key(key).map(|command| self.bind(key, command)))
			.collect()
	}

	/// Resolve a key to its bound command; the most recent binding wins
	pub fn command_for(&self, key: &str) -> Option<KeyCommand> {
		self.lock().bindings.iter().rev().find(|(_, bound, _)| bound == key).map(|(_, _, command)| *command)
	}

	pub fn len(&self) -> usize {
		self.lock().bindings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.lock().bindings.is_empty()
	}

	fn lock(&self) -> std::sync::MutexGuard<'_, BindingTable> {
		self.inner.lock().unwrap_or_else(PoisonError::into_inner)
	}
}

/// Removes its binding from the owning [`KeyBindingSet`] on drop
pub struct KeyBindingGuard {
	table: Weak<Mutex<BindingTable>>,
	id: u64,
}

impl Drop for KeyBindingGuard {
	fn drop(&mut self) {
		if let Some(table) = self.table.upgrade() {
			let mut table = table.lock().unwrap_or_else(PoisonError::into_inner);
			table.bindings.retain(|(id, _, _)| *id != self.id);
		}
	}
}
