use crate::core::models::molecule::Classification;

/// A stage of the detection workflow, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Centering,
    RotationSearch,
    ReflectionSearch,
    Orientation,
    Classification,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Centering => "Centering",
            Stage::RotationSearch => "Searching rotation axes",
            Stage::ReflectionSearch => "Searching mirror planes",
            Stage::Orientation => "Orienting molecule",
            Stage::Classification => "Classifying point group",
        }
    }
}

/// The kind of symmetry element a brute-force search is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    RotationAxis,
    MirrorPlane,
}

impl ElementKind {
    pub fn plural(self) -> &'static str {
        match self {
            ElementKind::RotationAxis => "rotation axes",
            ElementKind::MirrorPlane => "mirror planes",
        }
    }
}

/// Events emitted while a point set is analysed.
///
/// A search emits `CandidatesGenerated` once, one `CandidateValidated` per distinct candidate
/// (in any order when validation runs in parallel), then `ElementsFound`.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    StageStarted(Stage),
    StageFinished(Stage),

    CandidatesGenerated { kind: ElementKind, count: u64 },
    CandidateValidated { kind: ElementKind, accepted: bool },
    ElementsFound { kind: ElementKind, count: usize },

    Classified(Classification),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional front-end callback.
///
/// The reporter is shared by reference across rayon workers, so the callback must be
/// `Send + Sync`.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    /// A reporter that drops every event.
    pub fn new() -> Self {
        Self { callback: None }
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(callback) = self.callback.as_ref() {
            callback(event);
        }
    }

    /// Runs `body` bracketed by the start and finish events of `stage`.
    pub fn stage<T>(&self, stage: Stage, body: impl FnOnce() -> T) -> T {
        self.report(Progress::StageStarted(stage));
        let output = body();
        self.report(Progress::StageFinished(stage));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::molecule::PointGroup;
    use std::sync::{Arc, Mutex};

    fn recording_reporter() -> (ProgressReporter<'static>, Arc<Mutex<Vec<Progress>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));
        (reporter, events)
    }

    #[test]
    fn reporter_without_callback_is_silent() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::StageStarted(Stage::Centering));
        assert_eq!(reporter.stage(Stage::Orientation, || 7), 7);
    }

    #[test]
    fn stage_brackets_the_body_with_start_and_finish() {
        let (reporter, events) = recording_reporter();

        let found = reporter.stage(Stage::RotationSearch, || {
            reporter.report(Progress::CandidatesGenerated {
                kind: ElementKind::RotationAxis,
                count: 2,
            });
            reporter.report(Progress::ElementsFound {
                kind: ElementKind::RotationAxis,
                count: 1,
            });
            1
        });

        assert_eq!(found, 1);
        let events = events.lock().unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], Progress::StageStarted(Stage::RotationSearch));
        assert_eq!(events[3], Progress::StageFinished(Stage::RotationSearch));
    }

    #[test]
    fn classification_events_carry_the_result() {
        let (reporter, events) = recording_reporter();
        reporter.report(Progress::Classified(Classification::Resolved(PointGroup::Td)));
        assert_eq!(
            events.lock().unwrap()[0],
            Progress::Classified(Classification::Resolved(PointGroup::Td))
        );
    }

    #[test]
    fn labels_name_the_stage_and_element() {
        assert_eq!(Stage::ReflectionSearch.label(), "Searching mirror planes");
        assert_eq!(ElementKind::RotationAxis.plural(), "rotation axes");
    }
}
