//! Region Manager
//!
//! Each named region hosts at most one live screen. Replacing a screen
//! tears the old one down before the new one is constructed, so two
//! instances are never attached to the same region.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{RegionError, ScreenError};
use crate::screen::{Binding, MountOptions, Screen, ScreenFactory, ScreenKind};
use crate::ui::UiHelpers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(pub Uuid);

impl std::fmt::Display for MountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What currently occupies a region
#[derive(Debug, Clone)]
pub struct MountInfo {
    pub id: MountId,
    pub region: String,
    pub kind: ScreenKind,
    pub binding: Binding,
    pub mounted_at: DateTime<Utc>,
}

struct MountedScreen {
    info: MountInfo,
    screen: Box<dyn Screen>,
}

impl MountedScreen {
    fn dispose(mut self) {
        self.screen.teardown();
        tracing::debug!(
            region = %self.info.region,
            kind = %self.info.kind,
            mount_id = %self.info.id,
            "Tore down screen"
        );
    }
}

pub struct RegionManager {
    regions: HashMap<String, MountedScreen>,
    ui: Arc<UiHelpers>,
}

impl RegionManager {
    pub fn new(ui: Arc<UiHelpers>) -> Self {
        Self {
            regions: HashMap::new(),
            ui,
        }
    }

    pub fn ui(&self) -> &Arc<UiHelpers> {
        &self.ui
    }

    /// Replace whatever occupies `region` with a freshly built screen.
    ///
    /// On failure the previous screen is already gone and the region is
    /// left empty.
    pub fn mount(
        &mut self,
        region: &str,
        factory: &dyn ScreenFactory,
        kind: ScreenKind,
        binding: Binding,
    ) -> Result<MountInfo, RegionError> {
        if let Some(previous) = self.regions.remove(region) {
            previous.dispose();
        }

        let options = MountOptions {
            kind,
            binding,
            ui: Arc::clone(&self.ui),
        };

        let failure = |source: ScreenError| {
            tracing::error!(region = %region, kind = %kind, error = %source, "Screen mount failed");
            RegionError::MountFailure {
                region: region.to_string(),
                source,
            }
        };

        let mut screen = factory.build(&options).map_err(failure)?;
        if let Err(e) = screen.render() {
            screen.teardown();
            return Err(failure(e));
        }

        let info = MountInfo {
            id: MountId(Uuid::new_v4()),
            region: region.to_string(),
            kind,
            binding: options.binding,
            mounted_at: Utc::now(),
        };

        tracing::info!(
            region = %region,
            kind = %kind,
            binding = info.binding.as_str(),
            mount_id = %info.id,
            "Mounted screen"
        );

        self.regions.insert(
            region.to_string(),
            MountedScreen {
                info: info.clone(),
                screen,
            },
        );

        Ok(info)
    }

    /// Re-render the screen in `region` without rebuilding it
    pub fn render(&mut self, region: &str) -> Result<bool, RegionError> {
        let Some(mounted) = self.regions.get_mut(region) else {
            return Ok(false);
        };
        mounted
            .screen
            .render()
            .map_err(|source| RegionError::MountFailure {
                region: region.to_string(),
                source,
            })?;
        Ok(true)
    }

    /// Tear down and remove the screen in `region`
    pub fn unmount(&mut self, region: &str) -> bool {
        match self.regions.remove(region) {
            Some(mounted) => {
                mounted.dispose();
                true
            }
            None => false,
        }
    }

    /// Tear down every region
    pub fn clear(&mut self) {
        let mut names: Vec<String> = self.regions.keys().cloned().collect();
        names.sort();
        for name in names {
            self.unmount(&name);
        }
    }

    pub fn current(&self, region: &str) -> Option<MountInfo> {
        self.regions.get(region).map(|m| m.info.clone())
    }

    pub fn is_occupied(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    /// Occupied region names, sorted
    pub fn regions(&self) -> Vec<String> {
        let mut names: Vec<String> = self.regions.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Drop for RegionManager {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    type Journal = Arc<Mutex<Vec<String>>>;

    struct JournalScreen {
        name: String,
        journal: Journal,
    }

    impl Screen for JournalScreen {
        fn render(&mut self) -> Result<(), ScreenError> {
            self.journal.lock().push(format!("render {}", self.name));
            Ok(())
        }

        fn teardown(&mut self) {
            self.journal.lock().push(format!("teardown {}", self.name));
        }
    }

    struct JournalFactory {
        name: &'static str,
        journal: Journal,
    }

    impl ScreenFactory for JournalFactory {
        fn build(&self, _options: &MountOptions) -> Result<Box<dyn Screen>, ScreenError> {
            self.journal.lock().push(format!("build {}", self.name));
            Ok(Box::new(JournalScreen {
                name: self.name.to_string(),
                journal: Arc::clone(&self.journal),
            }))
        }
    }

    struct Failing;

    impl ScreenFactory for Failing {
        fn build(&self, _options: &MountOptions) -> Result<Box<dyn Screen>, ScreenError> {
            Err(ScreenError::Construction("boom".to_string()))
        }
    }

    struct BadRender {
        journal: Journal,
    }

    impl Screen for BadRender {
        fn render(&mut self) -> Result<(), ScreenError> {
            Err(ScreenError::Render("template missing".to_string()))
        }

        fn teardown(&mut self) {
            self.journal.lock().push("teardown bad".to_string());
        }
    }

    struct BadRenderFactory {
        journal: Journal,
    }

    impl ScreenFactory for BadRenderFactory {
        fn build(&self, _options: &MountOptions) -> Result<Box<dyn Screen>, ScreenError> {
            Ok(Box::new(BadRender {
                journal: Arc::clone(&self.journal),
            }))
        }
    }

    fn manager() -> RegionManager {
        RegionManager::new(Arc::new(UiHelpers::default()))
    }

    #[test]
    fn test_replace_tears_down_before_build() {
        let journal: Journal = Arc::default();
        let mut regions = manager();

        let a = JournalFactory { name: "a", journal: Arc::clone(&journal) };
        let b = JournalFactory { name: "b", journal: Arc::clone(&journal) };

        regions.mount("main", &a, ScreenKind::Landing, Binding::Empty).unwrap();
        let info = regions.mount("main", &b, ScreenKind::ActivityList, Binding::Empty).unwrap();

        assert_eq!(
            *journal.lock(),
            vec!["build a", "render a", "teardown a", "build b", "render b"]
        );
        assert_eq!(regions.regions(), vec!["main".to_string()]);
        assert_eq!(regions.current("main").unwrap().id, info.id);
        assert_eq!(regions.current("main").unwrap().kind, ScreenKind::ActivityList);
    }

    #[test]
    fn test_teardown_exactly_once() {
        let journal: Journal = Arc::default();
        let mut regions = manager();
        let a = JournalFactory { name: "a", journal: Arc::clone(&journal) };
        let b = JournalFactory { name: "b", journal: Arc::clone(&journal) };

        regions.mount("main", &a, ScreenKind::Landing, Binding::Empty).unwrap();
        regions.mount("main", &b, ScreenKind::Landing, Binding::Empty).unwrap();
        regions.mount("main", &b, ScreenKind::Landing, Binding::Empty).unwrap();
        drop(regions);

        let log = journal.lock();
        assert_eq!(log.iter().filter(|e| *e == "teardown a").count(), 1);
        assert_eq!(log.iter().filter(|e| *e == "teardown b").count(), 2);
    }

    #[test]
    fn test_regions_are_independent() {
        let journal: Journal = Arc::default();
        let mut regions = manager();
        let a = JournalFactory { name: "a", journal: Arc::clone(&journal) };
        let b = JournalFactory { name: "b", journal: Arc::clone(&journal) };

        regions.mount("navbar", &a, ScreenKind::Navbar, Binding::Empty).unwrap();
        regions.mount("main", &b, ScreenKind::Landing, Binding::Empty).unwrap();
        regions.mount("main", &b, ScreenKind::Landing, Binding::Empty).unwrap();

        assert!(regions.is_occupied("navbar"));
        assert!(!journal.lock().contains(&"teardown a".to_string()));
    }

    #[test]
    fn test_failed_construction_leaves_region_empty() {
        let journal: Journal = Arc::default();
        let mut regions = manager();
        let a = JournalFactory { name: "a", journal: Arc::clone(&journal) };

        regions.mount("main", &a, ScreenKind::Landing, Binding::Empty).unwrap();
        let result = regions.mount("main", &Failing, ScreenKind::RecordEdit, Binding::Empty);

        match result {
            Err(RegionError::MountFailure { region, source }) => {
                assert_eq!(region, "main");
                assert!(matches!(source, ScreenError::Construction(_)));
            }
            Ok(_) => panic!("Expected MountFailure"),
        }
        assert!(journal.lock().contains(&"teardown a".to_string()));
        assert!(regions.current("main").is_none());
    }

    #[test]
    fn test_failed_render_tears_down_new_screen() {
        let journal: Journal = Arc::default();
        let mut regions = manager();
        let bad = BadRenderFactory { journal: Arc::clone(&journal) };

        assert!(regions.mount("main", &bad, ScreenKind::Landing, Binding::Empty).is_err());
        assert_eq!(*journal.lock(), vec!["teardown bad"]);
        assert!(!regions.is_occupied("main"));
    }

    #[test]
    fn test_unmount_and_rerender() {
        let journal: Journal = Arc::default();
        let mut regions = manager();
        let a = JournalFactory { name: "a", journal: Arc::clone(&journal) };

        assert!(!regions.render("main").unwrap());
        regions.mount("main", &a, ScreenKind::Landing, Binding::Empty).unwrap();
        assert!(regions.render("main").unwrap());
        assert!(regions.unmount("main"));
        assert!(!regions.unmount("main"));

        assert_eq!(
            *journal.lock(),
            vec!["build a", "render a", "render a", "teardown a"]
        );
    }

    #[test]
    fn test_options_carry_shared_ui() {
        struct UiCheck(Arc<UiHelpers>);

        impl ScreenFactory for UiCheck {
            fn build(&self, options: &MountOptions) -> Result<Box<dyn Screen>, ScreenError> {
                assert!(Arc::ptr_eq(&self.0, &options.ui));
                Err(ScreenError::Construction("checked".to_string()))
            }
        }

        let mut regions = manager();
        let check = UiCheck(Arc::clone(regions.ui()));
        let _ = regions.mount("main", &check, ScreenKind::Landing, Binding::Empty);
    }
}
