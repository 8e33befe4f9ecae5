use contracts::domain::a002_catalogue_book::Catalogue;
use contracts::projections::p900_category_index::{ordered_tabs, CategoryIndex, CategoryTab};
use contracts::shared::config::CatalogueConfig;
use contracts::shared::navigation::{NavigationCommand, SpreadEngine, VisiblePages};
use leptos::prelude::*;

/// Состояние каталога, общее для всего приложения.
///
/// Everything except `engine` is fixed at start-up.
#[derive(Clone, Copy)]
pub struct CatalogueContext {
    pub catalogue: StoredValue<Catalogue>,
    pub config: StoredValue<CatalogueConfig>,
    pub index: StoredValue<CategoryIndex>,
    pub tabs: StoredValue<Vec<CategoryTab>>,
    pub engine: RwSignal<SpreadEngine>,
}

impl CatalogueContext {
    pub fn new(catalogue: Catalogue, config: CatalogueConfig) -> Self {
        let engine = SpreadEngine::from_catalogue(&catalogue);
        let index = CategoryIndex::build(engine.pages(), &config.categories.uncategorized_label);
        let tabs = ordered_tabs(&index, &config.categories);

        Self {
            catalogue: StoredValue::new(catalogue),
            config: StoredValue::new(config),
            index: StoredValue::new(index),
            tabs: StoredValue::new(tabs),
            engine: RwSignal::new(engine),
        }
    }

    pub fn apply(&self, command: NavigationCommand) {
        self.engine.update(|engine| engine.apply(command));
    }

    pub fn next(&self) {
        self.apply(NavigationCommand::Next);
    }

    pub fn previous(&self) {
        self.apply(NavigationCommand::Previous);
    }

    pub fn jump_to(&self, target_index: usize) {
        self.apply(NavigationCommand::JumpTo(target_index));
    }

    pub fn set_viewport_spread(&self, is_wide: bool) {
        // Resize events fire often; skip no-op writes so nothing re-renders.
        if self.engine.with_untracked(|engine| engine.is_spread() != is_wide) {
            self.engine
                .update(|engine| engine.set_viewport_spread(is_wide));
        }
    }

    pub fn visible_pages(&self) -> VisiblePages {
        self.engine.with(|engine| engine.visible_pages())
    }

    pub fn active_category(&self) -> Option<String> {
        let index = self.index;
        self.engine.with(|engine| {
            index.with_value(|index| index.active_category(engine.pages(), &engine.state()))
        })
    }
}

pub fn use_catalogue() -> CatalogueContext {
    leptos::context::use_context::<CatalogueContext>().expect("CatalogueContext context not found")
}
