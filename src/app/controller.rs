use std::path::Path;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Notice};
use crate::catalog::models::GameEntry;
use crate::catalog::queries;
use crate::catalog::store::CatalogStore;
use crate::engine::launcher;
use crate::error::{CatalogError, LaunchError};
use crate::infra::config::AppConfig;

pub struct ApplicationController {
    config: AppConfig,
    state: AppState,
    store: CatalogStore,
    catalog: Vec<GameEntry>,
}

impl ApplicationController {
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: CatalogStore::new(config.catalog_path.clone(), config.images_dir.clone()),
            config,
            state: AppState::default(),
            catalog: Vec::new(),
        }
    }

    /// Prepares the on-disk layout and loads the catalog. A malformed catalog
    /// aborts startup.
    pub fn bootstrap(&mut self) -> Result<(), CatalogError> {
        self.store.ensure_images_dir()?;
        self.store.initialize()?;
        self.catalog = self.store.load()?;
        log::info!(
            "loaded {} games from {:?} (icons in {:?})",
            self.catalog.len(),
            self.store.path(),
            self.store.images_dir()
        );
        Ok(())
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn catalog(&self) -> &[GameEntry] {
        &self.catalog
    }

    pub fn visible_entries(&self) -> Vec<(usize, &GameEntry)> {
        queries::filter_by_name(&self.catalog, &self.state.search)
    }

    pub fn dispatch(&mut self, event: AppEvent) {
        match event {
            AppEvent::UpdateSearch(query) => {
                self.state.search = query;
            }
            AppEvent::Launch(index) => {
                if self.state.notice.is_some() {
                    log::debug!("launch of index {index} ignored while a notice is open");
                    return;
                }
                if let Err(error) = self.launch_entry(index) {
                    self.state.notice = Some(Notice {
                        title: error.title().to_string(),
                        detail: error.detail(),
                    });
                }
            }
            AppEvent::DismissNotice => {
                self.state.notice = None;
            }
            AppEvent::Quit => {
                self.state.quit_requested = true;
            }
        }
    }

    pub fn launch_entry(&mut self, index: usize) -> Result<(), LaunchError> {
        let Some(entry) = self.catalog.get(index) else {
            log::warn!("launch requested for unknown catalog index {index}");
            return Ok(());
        };

        match launcher::launch(Path::new(&entry.path)) {
            Ok(()) => {
                self.state.launched += 1;
                Ok(())
            }
            Err(error) => {
                log::warn!("{error}");
                Err(error)
            }
        }
    }

    pub fn add_entry(&mut self, entry: GameEntry) -> Result<(), CatalogError> {
        self.catalog.push(entry);
        self.store.save(&self.catalog)
    }

    pub fn remove_entry(&mut self, name: &str) -> Result<GameEntry, CatalogError> {
        let (index, _) = queries::find_by_name(&self.catalog, name)
            .ok_or_else(|| CatalogError::NotFound(format!("no game named {name:?}")))?;
        let removed = self.catalog.remove(index);
        self.store.save(&self.catalog)?;
        Ok(removed)
    }
}
