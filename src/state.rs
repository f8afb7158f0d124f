use std::path::Path;

use crate::data::loader::load_file;
use crate::data::model::DashboardData;
use crate::view::{assemble, DashboardView};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Data the screen is built from (built-in samples until a file is loaded).
    pub data: DashboardData,

    /// Display records derived from `data` (cached).
    pub view: DashboardView,

    /// Where `data` came from; `None` for the built-in samples.
    pub source: Option<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether the last status message is an error.
    pub status_is_error: bool,

    /// `egui` time at which the current data was first shown. Reset whenever
    /// the data changes so the entrance animations replay.
    pub mounted_at: Option<f64>,

    /// Play entrance animations and count-ups.
    pub animations: bool,
}

impl Default for AppState {
    fn default() -> Self {
        let data = DashboardData::sample();
        Self {
            view: assemble(&data),
            data,
            source: None,
            status_message: None,
            status_is_error: false,
            mounted_at: None,
            animations: true,
        }
    }
}

impl AppState {
    /// Replace the data and rebuild the view.
    pub fn set_data(&mut self, data: DashboardData, source: Option<String>) {
        self.view = assemble(&data);
        self.data = data;
        self.source = source;
        self.mounted_at = None;
    }

    /// Go back to the built-in samples.
    pub fn reset_to_samples(&mut self) {
        self.set_data(DashboardData::sample(), None);
        self.status_message = None;
        self.status_is_error = false;
    }

    /// Load a snapshot file; on failure the current data stays on screen.
    pub fn load_path(&mut self, path: &Path) {
        match load_file(path) {
            Ok(report) => {
                let n_issues = report.issues.len();
                self.set_data(report.data, Some(path.display().to_string()));
                self.status_is_error = false;
                self.status_message = match report.issues.first() {
                    None => None,
                    Some(first) if n_issues == 1 => Some(format!("1 issue: {first}")),
                    Some(first) => Some(format!("{n_issues} issues, first: {first}")),
                };
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                self.status_is_error = true;
            }
        }
    }

    /// Seconds since mount, recording the mount on first call.
    pub fn elapsed(&mut self, now: f64) -> f64 {
        if !self.animations {
            return f64::INFINITY;
        }
        let mounted = *self.mounted_at.get_or_insert(now);
        (now - mounted).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_shows_samples() {
        let state = AppState::default();
        assert_eq!(state.view, assemble(&DashboardData::sample()));
        assert!(state.source.is_none());
    }

    #[test]
    fn elapsed_counts_from_first_frame() {
        let mut state = AppState::default();
        assert_eq!(state.elapsed(10.0), 0.0);
        assert_eq!(state.elapsed(10.5), 0.5);
    }

    #[test]
    fn disabled_animations_are_always_finished() {
        let mut state = AppState {
            animations: false,
            ..AppState::default()
        };
        assert!(crate::anim::all_finished(state.elapsed(0.0)));
    }

    #[test]
    fn failed_load_keeps_current_data() {
        let mut state = AppState::default();
        state.mounted_at = Some(3.0);
        state.load_path(Path::new("missing-snapshot.json"));
        assert!(state.status_is_error);
        assert!(state.status_message.is_some());
        assert_eq!(state.data, DashboardData::sample());
        assert_eq!(state.mounted_at, Some(3.0));
    }

    #[test]
    fn new_data_replays_animations() {
        let mut state = AppState::default();
        state.mounted_at = Some(3.0);
        let mut data = DashboardData::sample();
        data.current_aqi = 120.0;
        state.set_data(data, Some("custom.json".into()));
        assert_eq!(state.mounted_at, None);
        assert_eq!(state.view.gauge.label, "Insalubre");
        state.reset_to_samples();
        assert_eq!(state.view.gauge.label, "Moderada");
    }
}
