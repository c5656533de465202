use coffee_rec_api::{ApiResult, BrewMethod, Recommendation, BREW_GROUPS};

pub enum AppAsyncEvent {
    RecommendationsLoaded {
        outcome: ApiResult<Vec<Recommendation>>,
    },
}

/// One line of the brew-method picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrewRow {
    GroupLabel(&'static str),
    Method(BrewMethod),
}

pub fn brew_rows() -> Vec<BrewRow> {
    BREW_GROUPS
        .iter()
        .flat_map(|group| {
            std::iter::once(BrewRow::GroupLabel(group.label))
                .chain(group.methods.iter().copied().map(BrewRow::Method))
        })
        .collect()
}
