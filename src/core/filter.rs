use crate::constants::{FILTER_ALL, FILTER_SETTLE_MS, FILTER_SHOW_DELAY_MS, FILTER_STAGGER_MS};

/// Category selection carried by a filter button's `data-filter` value.
///
/// `Uncategorized` comes from a button with no `data-filter` at all and
/// selects exactly the items with no `data-category`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
    Uncategorized,
}

impl Filter {
    pub fn from_attribute(value: Option<&str>) -> Self {
        value.map_or(Filter::Uncategorized, Filter::parse)
    }

    /// `"all"` is the sentinel; anything else is matched verbatim.
    pub fn parse(value: &str) -> Self {
        if value == FILTER_ALL {
            Filter::All
        } else {
            Filter::Category(value.to_string())
        }
    }

    /// Exact string equality; an item without a category matches `All` and
    /// `Uncategorized` only.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(want) => category == Some(want.as_str()),
            Filter::Uncategorized => category.is_none(),
        }
    }
}

/// Millisecond offsets of one item's transition, relative to the click.
///
/// Fields:
/// - `hide_at_ms`: item gets `hide` and loses `show`
/// - `settle_at_ms`: item's `display` is decided from the filter
/// - `show_at_ms`: matching items swap `hide` for `show`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemSchedule {
    pub hide_at_ms: u32,
    pub settle_at_ms: u32,
    pub show_at_ms: u32,
}

impl ItemSchedule {
    pub fn for_index(index: usize) -> Self {
        let stagger = (index as u32).saturating_mul(FILTER_STAGGER_MS);
        let settle = FILTER_SETTLE_MS.saturating_add(stagger);
        Self {
            hide_at_ms: stagger,
            settle_at_ms: settle,
            show_at_ms: settle.saturating_add(FILTER_SHOW_DELAY_MS),
        }
    }
}

/// Presentation state of one portfolio item as the filter leaves it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemView {
    pub displayed: bool,
    pub hiding: bool,
    pub showing: bool,
}

impl ItemView {
    /// Items start displayed with the `show` marker.
    pub fn initial() -> Self {
        Self {
            displayed: true,
            hiding: false,
            showing: true,
        }
    }
}

/// Step of a filter pass, applied when its timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterStep {
    Hide,
    Settle,
    Show,
}

impl FilterStep {
    pub fn apply(self, view: &mut ItemView, matched: bool) {
        match self {
            FilterStep::Hide => {
                view.hiding = true;
                view.showing = false;
            }
            FilterStep::Settle => view.displayed = matched,
            FilterStep::Show => {
                view.hiding = false;
                view.showing = true;
            }
        }
    }
}

/// Per-item views plus the generation of the click that owns them.
///
/// Every click starts a new generation; a step whose generation is no longer
/// current is dropped, so rapid re-clicks cannot interleave stale steps.
#[derive(Clone, Debug, Default)]
pub struct FilterPass {
    generation: u64,
    active: Option<Filter>,
    views: Vec<ItemView>,
}

impl FilterPass {
    pub fn new(item_count: usize) -> Self {
        Self {
            generation: 0,
            active: None,
            views: vec![ItemView::initial(); item_count],
        }
    }

    pub fn begin(&mut self, filter: Filter) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.active = Some(filter);
        self.generation
    }

    #[inline]
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Apply `step` to item `index` if `generation` still owns the items.
    /// Returns the item's updated view, or `None` for a stale step.
    pub fn apply(
        &mut self,
        generation: u64,
        index: usize,
        step: FilterStep,
        matched: bool,
    ) -> Option<ItemView> {
        if !self.is_current(generation) {
            return None;
        }
        let view = self.views.get_mut(index)?;
        step.apply(view, matched);
        Some(*view)
    }

    pub fn active(&self) -> Option<&Filter> {
        self.active.as_ref()
    }

    pub fn views(&self) -> &[ItemView] {
        &self.views
    }

    /// Indices of items currently displayed.
    pub fn displayed(&self) -> Vec<usize> {
        self.views
            .iter()
            .enumerate()
            .filter(|(_, v)| v.displayed)
            .map(|(i, _)| i)
            .collect()
    }
}
