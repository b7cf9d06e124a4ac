//! Options service — form defaults and submission checks for room options.

use tempcalc_domain::classifier::Strategy;
use tempcalc_domain::options::{RoomOptions, SubmissionRejected};
use tempcalc_domain::selection::Selection;

use crate::ports::{AreaDirectory, EntitySnapshot};
use crate::services::selection_service::{SelectionRequest, SelectionService};

/// What a form render needs: the candidate lists and the pre-filled values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsForm {
    pub selection: Selection,
    pub defaults: RoomOptions,
}

/// Application service backing the room options form.
pub struct OptionsService<S, A> {
    selection: SelectionService<S, A>,
    strategy: Strategy,
}

impl<S: EntitySnapshot, A: AreaDirectory> OptionsService<S, A> {
    /// Create a new service reading from the given ports.
    pub fn new(snapshot: S, areas: A, strategy: Strategy) -> Self {
        Self {
            selection: SelectionService::new(snapshot, areas),
            strategy,
        }
    }

    /// Build the form for a render, honouring the room area and filter of
    /// `previous` when present.
    #[tracing::instrument(skip_all)]
    pub fn form(&self, previous: Option<&RoomOptions>) -> OptionsForm {
        let request = SelectionRequest {
            strategy: self.strategy,
            room_area: previous.and_then(|options| options.room_area.clone()),
            room_filter: previous.and_then(|options| options.room_filter.clone()),
        };
        let selection = self.selection.select(&request);
        let defaults = RoomOptions::prefill(&selection, previous);
        OptionsForm {
            selection,
            defaults,
        }
    }

    /// Check a submission against a fresh, unfiltered selection.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionRejected`] with field-level markers and the
    /// original input when an indoor sensor is missing or no longer a
    /// candidate.
    #[tracing::instrument(skip_all)]
    pub fn submit(&self, input: RoomOptions) -> Result<RoomOptions, SubmissionRejected> {
        let selection = self
            .selection
            .select(&SelectionRequest::unfiltered(self.strategy));
        input.validate(&selection).inspect_err(|rejected| {
            tracing::debug!(errors = rejected.errors.len(), "options submission rejected");
        })
    }
}
