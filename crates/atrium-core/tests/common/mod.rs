#![allow(dead_code)]

use parking_lot::Mutex;
use serde_json::json;
use std::sync::Arc;

use atrium_core::{
    Attributes, CollectionRegistry, DataSources, MemoryCollection, MountOptions, Navigator,
    NavigatorConfig, Screen, ScreenCatalog, ScreenError, ScreenFactory, ScreenKind,
};

pub type Journal = Arc<Mutex<Vec<String>>>;

pub const ALL_KINDS: [ScreenKind; 21] = [
    ScreenKind::Landing,
    ScreenKind::CollectionIndex,
    ScreenKind::RecordList,
    ScreenKind::RecordEdit,
    ScreenKind::ActivityList,
    ScreenKind::MediaList,
    ScreenKind::UserList,
    ScreenKind::UserEdit,
    ScreenKind::SettingsMain,
    ScreenKind::SettingsTables,
    ScreenKind::SettingsGlobal,
    ScreenKind::SettingsMedia,
    ScreenKind::SettingsPermissions,
    ScreenKind::SettingsSystem,
    ScreenKind::SettingsAbout,
    ScreenKind::SettingsSchema,
    ScreenKind::MessageList,
    ScreenKind::Navbar,
    ScreenKind::TabStrip,
    ScreenKind::Alert,
    ScreenKind::Modal,
];

/// Screen that logs its lifecycle to a shared journal
pub struct JournalScreen {
    kind: ScreenKind,
    journal: Journal,
}

impl Screen for JournalScreen {
    fn render(&mut self) -> Result<(), ScreenError> {
        self.journal.lock().push(format!("render {}", self.kind));
        Ok(())
    }

    fn teardown(&mut self) {
        self.journal.lock().push(format!("teardown {}", self.kind));
    }
}

#[derive(Clone)]
pub struct JournalFactory {
    pub journal: Journal,
}

impl ScreenFactory for JournalFactory {
    fn build(&self, options: &MountOptions) -> Result<Box<dyn Screen>, ScreenError> {
        self.journal.lock().push(format!("build {}", options.kind));
        Ok(Box::new(JournalScreen {
            kind: options.kind,
            journal: Arc::clone(&self.journal),
        }))
    }
}

pub fn catalog_without(journal: &Journal, missing: &[ScreenKind]) -> ScreenCatalog {
    let mut catalog = ScreenCatalog::new();
    for kind in ALL_KINDS.iter().filter(|k| !missing.contains(*k)) {
        catalog.register(
            *kind,
            JournalFactory {
                journal: Arc::clone(journal),
            },
        );
    }
    catalog
}

pub fn catalog(journal: &Journal) -> ScreenCatalog {
    catalog_without(journal, &[])
}

pub fn rows(values: &[serde_json::Value]) -> Vec<Attributes> {
    values
        .iter()
        .map(|v| v.as_object().cloned().unwrap_or_default())
        .collect()
}

pub struct Fixture {
    pub journal: Journal,
    pub articles: Arc<MemoryCollection>,
    pub widgets: Arc<MemoryCollection>,
    pub media: Arc<MemoryCollection>,
    pub users: Arc<MemoryCollection>,
    pub settings: Arc<MemoryCollection>,
    pub sources: DataSources,
}

impl Fixture {
    pub fn new() -> Self {
        let articles = Arc::new(MemoryCollection::with_records(
            "articles",
            rows(&[json!({"id": 1, "title": "First"}), json!({"id": 2, "title": "Second"})]),
        ));
        let widgets = Arc::new(
            MemoryCollection::with_records("widgets", rows(&[json!({"id": 1, "color": "red"})]))
                .singular(true),
        );
        let catalog = Arc::new(MemoryCollection::with_records(
            "collections",
            rows(&[json!({"id": "articles"}), json!({"id": "widgets"})]),
        ));
        let article_columns = Arc::new(MemoryCollection::with_records(
            "articles",
            rows(&[json!({"id": "title", "type": "string"})]),
        ));
        let media = Arc::new(MemoryCollection::with_records(
            "media",
            rows(&[json!({"id": 1}), json!({"id": 2})]),
        ));
        let users = Arc::new(MemoryCollection::with_records(
            "users",
            rows(&[json!({"id": 1, "first_name": "Ada"})]),
        ));
        let settings = Arc::new(MemoryCollection::with_records(
            "settings",
            rows(&[
                json!({"id": "global", "site_name": "Acme"}),
                json!({"id": "media", "thumbnail_size": 200}),
            ]),
        ));

        let sources = DataSources {
            catalog,
            collections: CollectionRegistry::new()
                .with(articles.clone())
                .with(widgets.clone()),
            schemas: CollectionRegistry::new().with(article_columns),
            activity: Arc::new(MemoryCollection::with_records(
                "activity",
                rows(&[json!({"id": 1}), json!({"id": 2}), json!({"id": 3})]),
            )),
            media: media.clone(),
            users: users.clone(),
            messages: Arc::new(MemoryCollection::new("messages")),
            settings: settings.clone(),
        };

        Self {
            journal: Journal::default(),
            articles,
            widgets,
            media,
            users,
            settings,
            sources,
        }
    }

    pub fn navigator(&self) -> Navigator {
        self.navigator_with(NavigatorConfig::default(), catalog(&self.journal))
    }

    pub fn navigator_with(&self, config: NavigatorConfig, screens: ScreenCatalog) -> Navigator {
        Navigator::new(config, self.sources.clone(), screens).unwrap()
    }

    pub fn count(&self, entry: &str) -> usize {
        self.journal.lock().iter().filter(|e| *e == entry).count()
    }
}
