//! Navigation Dispatcher
//!
//! The [`Navigator`] is the single owner of navigation state. It is
//! created at application start and torn down with [`Navigator::shutdown`]
//! (or on drop).

use std::sync::Arc;

use atrium_chrome::{Chrome, ChromeView, CountWatch, Tab};
use atrium_data::{Collection, ResourceResolver};
use atrium_routes::{NavigationRequest, RouteTable};
use atrium_shell::{
    AlertHandle, Binding, ModalHandle, MountInfo, OverlayManager, RegionManager, ScreenCatalog,
    ScreenFactory, ScreenKind, UiHelpers, MAIN_REGION, NAVBAR_REGION, TABS_REGION,
};

use crate::config::{CountSource, NavigatorConfig};
use crate::error::NavigationError;
use crate::handler::{Handler, SettingsPanel};
use crate::sources::DataSources;
use crate::Result;

pub struct Navigator {
    config: NavigatorConfig,
    routes: RouteTable<Handler>,
    resolver: ResourceResolver,
    data: DataSources,
    screens: ScreenCatalog,
    chrome: Chrome,
    regions: RegionManager,
    overlays: OverlayManager,
    /// Live tab-count subscriptions
    watches: Vec<CountWatch>,
    /// Last successfully dispatched path, as requested
    current_path: Option<String>,
    shut_down: bool,
}

impl Navigator {
    pub fn new(config: NavigatorConfig, data: DataSources, screens: ScreenCatalog) -> Result<Self> {
        config.validate()?;

        let routes = Handler::routes()?;
        let resolver = ResourceResolver::with_sentinel(config.new_record_sentinel.clone());
        let ui = Arc::new(UiHelpers::new(config.date_format.clone()));

        let tabs = config
            .tabs
            .iter()
            .map(|spec| {
                let tab = Tab::new(spec.id.clone(), spec.title.clone());
                match data.count_source(spec.count_source) {
                    Some(source) => tab.with_count(source.len()),
                    None => tab,
                }
            })
            .collect();
        let chrome = Chrome::new(tabs).with_site_name(config.site_name.clone());

        let watches = config
            .tabs
            .iter()
            .filter(|spec| spec.count_source == CountSource::Media)
            .map(|spec| chrome.watch_count(&spec.id, &data.media))
            .collect();

        let regions = RegionManager::new(Arc::clone(&ui));
        let overlays = OverlayManager::new(screens.resolve(ScreenKind::Alert), ui);

        let mut navigator = Self {
            config,
            routes,
            resolver,
            data,
            screens,
            chrome,
            regions,
            overlays,
            watches,
            current_path: None,
            shut_down: false,
        };
        navigator.mount_chrome()?;

        tracing::info!(
            routes = navigator.routes.len(),
            tabs = navigator.config.tabs.len(),
            "Navigator initialized"
        );

        Ok(navigator)
    }

    /// Navigate to `path`.
    ///
    /// Chrome is updated before the resource is resolved, and the resource
    /// is resolved before the main region is remounted.
    pub fn dispatch(&mut self, path: &str) -> Result<()> {
        if self.shut_down {
            return Err(NavigationError::ShutDown);
        }

        let request = self.routes.match_path(path)?;
        let handler = request.handler();

        let (title, tab) = match handler {
            Handler::Index => (
                self.config.landing_title.clone(),
                Some(self.config.landing_tab.clone()),
            ),
            other => {
                let (title, tab) = other.chrome();
                (title.to_string(), tab.map(str::to_string))
            }
        };
        self.chrome.set_title(&title);
        self.chrome.set_active_tab(tab.as_deref());

        let (kind, binding) = self.resolve(&request)?;
        self.mount_main(kind, binding)?;

        tracing::info!(
            path = %request.path,
            handler = ?handler,
            screen = %kind,
            "Dispatched"
        );

        self.current_path = Some(request.path);
        Ok(())
    }

    /// Join `segments` with `/` and dispatch
    pub fn go<S: AsRef<str>>(&mut self, segments: &[S]) -> Result<()> {
        let path = segments
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join("/");
        self.dispatch(&path)
    }

    /// Mount a screen in the main region without touching chrome
    pub fn set_page(&mut self, kind: ScreenKind, binding: Binding) -> Result<MountInfo> {
        if self.shut_down {
            return Err(NavigationError::ShutDown);
        }
        self.mount_main(kind, binding)
    }

    pub fn show_alert(&mut self, message: &str) -> Result<AlertHandle> {
        Ok(self.overlays.show_alert(message)?)
    }

    pub fn hide_alert(&mut self) -> bool {
        self.overlays.hide_alert()
    }

    pub fn open_modal(&mut self, factory: &dyn ScreenFactory, binding: Binding) -> Result<ModalHandle> {
        Ok(self.overlays.open_modal(factory, binding)?)
    }

    pub fn dismiss_modal(&mut self, handle: &ModalHandle) -> Result<()> {
        Ok(self.overlays.dismiss_modal(handle)?)
    }

    /// Read-only chrome. Only dispatch writes to it.
    pub fn chrome(&self) -> ChromeView {
        self.chrome.view()
    }

    pub fn regions(&self) -> &RegionManager {
        &self.regions
    }

    pub fn overlays(&self) -> &OverlayManager {
        &self.overlays
    }

    /// Screen currently mounted in the main region
    pub fn main(&self) -> Option<MountInfo> {
        self.regions.current(MAIN_REGION)
    }

    pub fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }

    pub fn routes(&self) -> &RouteTable<Handler> {
        &self.routes
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn data(&self) -> &DataSources {
        &self.data
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Release collection subscriptions and tear down every screen and
    /// overlay. Further dispatches fail with [`NavigationError::ShutDown`].
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        for watch in &mut self.watches {
            watch.release();
        }
        self.watches.clear();
        self.overlays.clear();
        self.regions.clear();
        self.shut_down = true;

        tracing::info!("Navigator shut down");
    }

    /// Pick the screen and its data for a matched request
    fn resolve(&self, request: &NavigationRequest<Handler>) -> Result<(ScreenKind, Binding)> {
        let resolved = match request.handler() {
            Handler::Index => (ScreenKind::Landing, self.catalog()),
            Handler::Collections => (ScreenKind::CollectionIndex, self.catalog()),
            Handler::Entries => {
                let name = required(request, "name")?;
                let collection = self.data.collections.require(name)?;
                // re-read on every dispatch, the flag may change at runtime
                if collection.is_singular() {
                    tracing::debug!(
                        collection = %name,
                        record_id = %self.config.singular_record_id,
                        "Singular collection, opening its record"
                    );
                    self.record_screen(
                        ScreenKind::RecordEdit,
                        collection.as_ref(),
                        &self.config.singular_record_id,
                    )
                } else {
                    (ScreenKind::RecordList, Binding::Collection(collection))
                }
            }
            Handler::Entry => {
                let collection = self.data.collections.require(required(request, "name")?)?;
                self.record_screen(
                    ScreenKind::RecordEdit,
                    collection.as_ref(),
                    required(request, "id")?,
                )
            }
            Handler::Activity => (
                ScreenKind::ActivityList,
                Binding::Collection(Arc::clone(&self.data.activity)),
            ),
            Handler::Media => (
                ScreenKind::MediaList,
                Binding::Collection(Arc::clone(&self.data.media)),
            ),
            Handler::Users => match request.param("id") {
                Some(id) => self.record_screen(ScreenKind::UserEdit, self.data.users.as_ref(), id),
                None => (
                    ScreenKind::UserList,
                    Binding::Collection(Arc::clone(&self.data.users)),
                ),
            },
            Handler::Settings => {
                let panel = SettingsPanel::from_name(request.param("name"));
                let binding = match panel {
                    SettingsPanel::Main | SettingsPanel::Tables => self.catalog(),
                    SettingsPanel::Global | SettingsPanel::Media => {
                        let key = panel.settings_key().unwrap_or_default();
                        Binding::Record(self.resolver.resolve(self.data.settings.as_ref(), key))
                    }
                    SettingsPanel::Permissions | SettingsPanel::System | SettingsPanel::About => {
                        Binding::Empty
                    }
                };
                (panel.screen(), binding)
            }
            Handler::SettingsSchema => {
                let schema = self.data.schemas.require(required(request, "name")?)?;
                (ScreenKind::SettingsSchema, Binding::Collection(schema))
            }
            Handler::Messages => (
                ScreenKind::MessageList,
                Binding::Collection(Arc::clone(&self.data.messages)),
            ),
        };
        Ok(resolved)
    }

    fn record_screen(
        &self,
        kind: ScreenKind,
        collection: &dyn Collection,
        record_id: &str,
    ) -> (ScreenKind, Binding) {
        (
            kind,
            Binding::Record(self.resolver.resolve(collection, record_id)),
        )
    }

    fn catalog(&self) -> Binding {
        Binding::Collection(Arc::clone(&self.data.catalog))
    }

    fn mount_main(&mut self, kind: ScreenKind, binding: Binding) -> Result<MountInfo> {
        let factory = self.screens.resolve(kind);
        Ok(self
            .regions
            .mount(MAIN_REGION, factory.as_ref(), kind, binding)?)
    }

    /// Navbar and tab strip are mounted once and survive navigation
    fn mount_chrome(&mut self) -> Result<()> {
        if let Some(factory) = self.screens.factory(ScreenKind::Navbar) {
            let global = self.resolver.resolve(self.data.settings.as_ref(), "global");
            self.regions.mount(
                NAVBAR_REGION,
                factory.as_ref(),
                ScreenKind::Navbar,
                Binding::Record(global),
            )?;
        }
        if let Some(factory) = self.screens.factory(ScreenKind::TabStrip) {
            self.regions.mount(
                TABS_REGION,
                factory.as_ref(),
                ScreenKind::TabStrip,
                Binding::Chrome(self.chrome.view()),
            )?;
        }
        Ok(())
    }
}

impl Drop for Navigator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("current_path", &self.current_path)
            .field("chrome", &self.chrome)
            .field("regions", &self.regions.regions())
            .field("modals", &self.overlays.modal_count())
            .field("shut_down", &self.shut_down)
            .finish()
    }
}

fn required<'a>(request: &'a NavigationRequest<Handler>, name: &str) -> Result<&'a str> {
    request.param(name).ok_or_else(|| {
        NavigationError::Route(atrium_routes::RouteError::MissingParam {
            pattern: request.route.pattern.to_string(),
            param: name.to_string(),
        })
    })
}
