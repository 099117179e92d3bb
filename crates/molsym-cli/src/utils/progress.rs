use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use molsym::engine::progress::{ElementKind, Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// Terminal state behind the handler: one reusable bar and the running count of accepted
/// candidates for the search in flight.
struct Display {
    bar: ProgressBar,
    accepted: u64,
}

impl Display {
    fn apply(&mut self, event: Progress) {
        match event {
            Progress::StageStarted(stage) => {
                self.bar.reset();
                self.bar.set_length(0);
                self.bar.set_style(spinner_style());
                self.bar
                    .enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                self.bar.set_message(stage.label());
            }
            Progress::CandidatesGenerated { kind, count } => {
                self.accepted = 0;
                self.bar.disable_steady_tick();
                self.bar.reset();
                self.bar.set_length(count);
                self.bar.set_style(bar_style());
                self.bar.set_message(search_message(kind, 0));
            }
            Progress::CandidateValidated { kind, accepted } => {
                if accepted {
                    self.accepted += 1;
                    self.bar.set_message(search_message(kind, self.accepted));
                }
                self.bar.inc(1);
            }
            Progress::ElementsFound { kind, count } => {
                if let Some(length) = self.bar.length() {
                    self.bar.set_position(length);
                }
                self.bar
                    .finish_with_message(format!("✓ {} {} found", count, kind.plural()));
            }
            Progress::StageFinished(stage) => {
                self.bar.disable_steady_tick();
                if !self.bar.is_finished() {
                    self.bar.finish_with_message(format!("✓ {}", stage.label()));
                }
            }
            Progress::Classified(classification) => {
                self.bar
                    .set_message(format!("Point group: {}", classification));
            }
        }
    }
}

fn search_message(kind: ElementKind, accepted: u64) -> String {
    format!("{}: {} accepted", kind.plural(), accepted)
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg:<32} [{bar:40.cyan/blue}] {pos}/{len} candidates")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-")
}

/// Renders detection progress on stderr: a spinner per stage and a candidate bar per search.
#[derive(Clone)]
pub struct CliProgressHandler {
    display: Arc<Mutex<Display>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::drawing_to(ProgressDrawTarget::stderr())
    }

    /// A handler that tracks state without drawing anything.
    #[cfg(test)]
    pub fn hidden() -> Self {
        Self::drawing_to(ProgressDrawTarget::hidden())
    }

    fn drawing_to(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target).with_style(spinner_style());
        bar.finish_and_clear();
        Self {
            display: Arc::new(Mutex::new(Display { bar, accepted: 0 })),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let display = self.display.clone();
        Box::new(move |event| match display.lock() {
            Ok(mut display) => display.apply(event),
            Err(_) => warn!("Progress display mutex was poisoned; dropping event."),
        })
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use molsym::core::models::molecule::{Classification, PointGroup};
    use molsym::engine::progress::Stage;
    use std::thread;

    fn message(handler: &CliProgressHandler) -> String {
        handler.display.lock().unwrap().bar.message()
    }

    #[test]
    fn handler_starts_finished_and_empty() {
        let handler = CliProgressHandler::hidden();
        let display = handler.display.lock().unwrap();
        assert_eq!(display.bar.length(), Some(0));
        assert!(display.bar.is_finished());
        assert_eq!(display.accepted, 0);
    }

    #[test]
    fn search_events_drive_the_candidate_bar() {
        let handler = CliProgressHandler::hidden();
        let callback = handler.get_callback();
        let kind = ElementKind::RotationAxis;

        callback(Progress::StageStarted(Stage::RotationSearch));
        assert_eq!(message(&handler), "Searching rotation axes");

        callback(Progress::CandidatesGenerated { kind, count: 3 });
        callback(Progress::CandidateValidated {
            kind,
            accepted: true,
        });
        callback(Progress::CandidateValidated {
            kind,
            accepted: false,
        });
        {
            let display = handler.display.lock().unwrap();
            assert_eq!(display.bar.length(), Some(3));
            assert_eq!(display.bar.position(), 2);
            assert_eq!(display.accepted, 1);
            assert_eq!(display.bar.message(), "rotation axes: 1 accepted");
        }

        callback(Progress::ElementsFound { kind, count: 1 });
        {
            let display = handler.display.lock().unwrap();
            assert!(display.bar.is_finished());
            assert_eq!(display.bar.position(), 3);
        }

        callback(Progress::StageFinished(Stage::RotationSearch));
        assert_eq!(message(&handler), "✓ 1 rotation axes found");
    }

    #[test]
    fn new_search_resets_the_accepted_count() {
        let handler = CliProgressHandler::hidden();
        let callback = handler.get_callback();

        callback(Progress::CandidatesGenerated {
            kind: ElementKind::RotationAxis,
            count: 1,
        });
        callback(Progress::CandidateValidated {
            kind: ElementKind::RotationAxis,
            accepted: true,
        });
        callback(Progress::CandidatesGenerated {
            kind: ElementKind::MirrorPlane,
            count: 4,
        });

        assert_eq!(handler.display.lock().unwrap().accepted, 0);
        assert_eq!(message(&handler), "mirror planes: 0 accepted");
    }

    #[test]
    fn stage_without_search_finishes_with_its_label() {
        let handler = CliProgressHandler::hidden();
        let callback = handler.get_callback();

        callback(Progress::StageStarted(Stage::Orientation));
        callback(Progress::StageFinished(Stage::Orientation));

        assert_eq!(message(&handler), "✓ Orienting molecule");
    }

    #[test]
    fn classification_is_shown_as_the_final_message() {
        let handler = CliProgressHandler::hidden();
        let callback = handler.get_callback();

        callback(Progress::Classified(Classification::Resolved(PointGroup::Oh)));

        assert_eq!(message(&handler), "Point group: O_{h}");
    }

    #[test]
    fn callback_can_be_driven_from_another_thread() {
        let handler = CliProgressHandler::hidden();
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::StageStarted(Stage::Centering));
            callback(Progress::StageFinished(Stage::Centering));
        })
        .join()
        .unwrap();

        assert!(handler.display.lock().unwrap().bar.is_finished());
        assert_eq!(message(&handler), "✓ Centering");
    }
}
