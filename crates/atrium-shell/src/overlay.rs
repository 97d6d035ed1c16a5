//! Transient Overlay Manager
//!
//! Alerts and modals are layered above the regions and are not touched by
//! navigation:
//! - at most one alert; showing another while one is up returns the
//!   existing one
//! - any number of modals, stacked in insertion order, each dismissed on
//!   its own

use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::OverlayError;
use crate::screen::{Binding, MountOptions, Screen, ScreenFactory, ScreenKind};
use crate::ui::UiHelpers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(pub Uuid);

impl std::fmt::Display for OverlayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertHandle {
    pub id: OverlayId,
    pub message: String,
    pub shown_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalHandle {
    pub id: OverlayId,
    pub opened_at: DateTime<Utc>,
}

struct Alert {
    handle: AlertHandle,
    screen: Box<dyn Screen>,
}

struct Modal {
    handle: ModalHandle,
    screen: Box<dyn Screen>,
}

pub struct OverlayManager {
    alert: Option<Alert>,
    /// Bottom to top
    modals: Vec<Modal>,
    alert_factory: Arc<dyn ScreenFactory>,
    ui: Arc<UiHelpers>,
}

impl OverlayManager {
    pub fn new(alert_factory: Arc<dyn ScreenFactory>, ui: Arc<UiHelpers>) -> Self {
        Self {
            alert: None,
            modals: Vec::new(),
            alert_factory,
            ui,
        }
    }

    /// Show `message` unless an alert is already up, in which case the
    /// existing alert is returned unchanged
    pub fn show_alert(&mut self, message: &str) -> Result<AlertHandle, OverlayError> {
        if let Some(alert) = &self.alert {
            tracing::debug!(
                alert_id = %alert.handle.id,
                ignored = %message,
                "Alert already showing"
            );
            return Ok(alert.handle.clone());
        }

        let screen = self.build(
            self.alert_factory.as_ref(),
            ScreenKind::Alert,
            Binding::Message(message.to_string()),
        )?;
        let handle = AlertHandle {
            id: OverlayId(Uuid::new_v4()),
            message: message.to_string(),
            shown_at: Utc::now(),
        };

        tracing::info!(alert_id = %handle.id, message = %message, "Showing alert");

        self.alert = Some(Alert {
            handle: handle.clone(),
            screen,
        });
        Ok(handle)
    }

    /// Returns whether an alert was removed
    pub fn hide_alert(&mut self) -> bool {
        let Some(mut alert) = self.alert.take() else {
            return false;
        };
        alert.screen.teardown();
        tracing::info!(alert_id = %alert.handle.id, "Hid alert");
        true
    }

    pub fn alert(&self) -> Option<&AlertHandle> {
        self.alert.as_ref().map(|a| &a.handle)
    }

    /// Open a new modal on top of the stack
    pub fn open_modal(
        &mut self,
        factory: &dyn ScreenFactory,
        binding: Binding,
    ) -> Result<ModalHandle, OverlayError> {
        let screen = self.build(factory, ScreenKind::Modal, binding)?;
        let handle = ModalHandle {
            id: OverlayId(Uuid::new_v4()),
            opened_at: Utc::now(),
        };

        tracing::info!(
            modal_id = %handle.id,
            depth = self.modals.len() + 1,
            "Opened modal"
        );

        self.modals.push(Modal {
            handle: handle.clone(),
            screen,
        });
        Ok(handle)
    }

    pub fn dismiss_modal(&mut self, handle: &ModalHandle) -> Result<(), OverlayError> {
        let pos = self
            .modals
            .iter()
            .position(|m| m.handle.id == handle.id)
            .ok_or_else(|| OverlayError::UnknownModal(handle.id.to_string()))?;

        let mut modal = self.modals.remove(pos);
        modal.screen.teardown();
        tracing::info!(modal_id = %handle.id, "Dismissed modal");
        Ok(())
    }

    /// Open modals, bottom to top
    pub fn modals(&self) -> Vec<ModalHandle> {
        self.modals.iter().map(|m| m.handle.clone()).collect()
    }

    pub fn modal_count(&self) -> usize {
        self.modals.len()
    }

    /// Tear down every overlay, topmost modal first
    pub fn clear(&mut self) {
        while let Some(mut modal) = self.modals.pop() {
            modal.screen.teardown();
        }
        self.hide_alert();
    }

    fn build(
        &self,
        factory: &dyn ScreenFactory,
        kind: ScreenKind,
        binding: Binding,
    ) -> Result<Box<dyn Screen>, OverlayError> {
        let options = MountOptions {
            kind,
            binding,
            ui: Arc::clone(&self.ui),
        };
        let mut screen = factory.build(&options)?;
        if let Err(e) = screen.render() {
            screen.teardown();
            tracing::error!(kind = %kind, error = %e, "Overlay render failed");
            return Err(e.into());
        }
        Ok(screen)
    }
}

impl Drop for OverlayManager {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScreenError;
    use parking_lot::Mutex;

    type Journal = Arc<Mutex<Vec<String>>>;

    struct Banner {
        label: String,
        journal: Journal,
    }

    impl Screen for Banner {
        fn render(&mut self) -> Result<(), ScreenError> {
            self.journal.lock().push(format!("render {}", self.label));
            Ok(())
        }

        fn teardown(&mut self) {
            self.journal.lock().push(format!("teardown {}", self.label));
        }
    }

    /// Labels screens by their message, or a running number for modals
    struct BannerFactory {
        journal: Journal,
        built: Mutex<usize>,
    }

    impl BannerFactory {
        fn new(journal: &Journal) -> Self {
            Self {
                journal: Arc::clone(journal),
                built: Mutex::new(0),
            }
        }
    }

    impl ScreenFactory for BannerFactory {
        fn build(&self, options: &MountOptions) -> Result<Box<dyn Screen>, ScreenError> {
            let mut built = self.built.lock();
            *built += 1;
            let label = match &options.binding {
                Binding::Message(message) => message.clone(),
                _ => format!("modal{}", *built),
            };
            Ok(Box::new(Banner {
                label,
                journal: Arc::clone(&self.journal),
            }))
        }
    }

    fn overlays(journal: &Journal) -> OverlayManager {
        OverlayManager::new(
            Arc::new(BannerFactory::new(journal)),
            Arc::new(UiHelpers::default()),
        )
    }

    #[test]
    fn test_second_alert_is_ignored() {
        let journal: Journal = Arc::default();
        let mut overlays = overlays(&journal);

        let first = overlays.show_alert("Saved").unwrap();
        let second = overlays.show_alert("Deleted").unwrap();

        assert_eq!(first, second);
        assert_eq!(overlays.alert().unwrap().message, "Saved");
        assert_eq!(*journal.lock(), vec!["render Saved"]);
    }

    #[test]
    fn test_hide_alert() {
        let journal: Journal = Arc::default();
        let mut overlays = overlays(&journal);

        assert!(!overlays.hide_alert());
        overlays.show_alert("Saved").unwrap();
        assert!(overlays.hide_alert());
        assert!(overlays.alert().is_none());

        overlays.show_alert("Deleted").unwrap();
        assert_eq!(overlays.alert().unwrap().message, "Deleted");
        assert_eq!(
            *journal.lock(),
            vec!["render Saved", "teardown Saved", "render Deleted"]
        );
    }

    #[test]
    fn test_modals_stack_and_dismiss_independently() {
        let journal: Journal = Arc::default();
        let mut overlays = overlays(&journal);
        let factory = BannerFactory::new(&journal);

        let first = overlays.open_modal(&factory, Binding::Empty).unwrap();
        let second = overlays.open_modal(&factory, Binding::Empty).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(overlays.modals(), vec![first.clone(), second.clone()]);

        overlays.dismiss_modal(&first).unwrap();
        assert_eq!(overlays.modals(), vec![second.clone()]);
        assert!(matches!(
            overlays.dismiss_modal(&first),
            Err(OverlayError::UnknownModal(_))
        ));

        assert_eq!(
            *journal.lock(),
            vec!["render modal1", "render modal2", "teardown modal1"]
        );
    }

    #[test]
    fn test_alert_and_modals_coexist() {
        let journal: Journal = Arc::default();
        let mut overlays = overlays(&journal);
        let factory = BannerFactory::new(&journal);

        overlays.show_alert("Saved").unwrap();
        overlays.open_modal(&factory, Binding::Empty).unwrap();
        overlays.hide_alert();
        assert_eq!(overlays.modal_count(), 1);

        drop(overlays);
        assert_eq!(journal.lock().last().map(String::as_str), Some("teardown modal1"));
    }

    #[test]
    fn test_failed_modal_is_not_stacked() {
        struct Refuses;

        impl ScreenFactory for Refuses {
            fn build(&self, _options: &MountOptions) -> Result<Box<dyn Screen>, ScreenError> {
                Err(ScreenError::Construction("no template".to_string()))
            }
        }

        let journal: Journal = Arc::default();
        let mut overlays = overlays(&journal);
        assert!(matches!(
            overlays.open_modal(&Refuses, Binding::Empty),
            Err(OverlayError::Screen(ScreenError::Construction(_)))
        ));
        assert_eq!(overlays.modal_count(), 0);
    }
}
