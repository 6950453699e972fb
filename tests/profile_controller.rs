use std::sync::Mutex;

use shell_profiles::error::{AppError, AppResult};
use shell_profiles::host::HostBridge;
use shell_profiles::profiles::{DUPLICATE_PROFILE_MESSAGE, Phase, ProfileController, Validity};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    GetActiveProfile,
    GetExistingProfiles,
    SetActiveProfileStarted(String),
    SetActiveProfileResolved(String),
    Restart,
}

#[derive(Debug, Default)]
struct RecordingBridge {
    active: String,
    profiles: Vec<String>,
    fail_set_active: bool,
    fail_restart: bool,
    calls: Mutex<Vec<Call>>,
}

impl RecordingBridge {
    fn new(active: &str, profiles: &[&str]) -> Self {
        Self {
            active: active.to_string(),
            profiles: profiles.iter().map(|name| name.to_string()).collect(),
            ..Self::default()
        }
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn calls_after_load(&self) -> Vec<Call> {
        self.calls().into_iter().skip(2).collect()
    }
}

impl HostBridge for RecordingBridge {
    async fn get_active_profile(&self) -> AppResult<String> {
        self.record(Call::GetActiveProfile);
        Ok(self.active.clone())
    }

    async fn get_existing_profiles(&self) -> AppResult<Vec<String>> {
        self.record(Call::GetExistingProfiles);
        Ok(self.profiles.clone())
    }

    async fn set_active_profile(&self, profile: &str) -> AppResult<()> {
        self.record(Call::SetActiveProfileStarted(profile.to_string()));
        tokio::task::yield_now().await;
        if self.fail_set_active {
            return Err(AppError::Bridge("disk full".to_string()));
        }
        self.record(Call::SetActiveProfileResolved(profile.to_string()));
        Ok(())
    }

    async fn restart(&self) -> AppResult<()> {
        self.record(Call::Restart);
        if self.fail_restart {
            return Err(AppError::Bridge("restart refused".to_string()));
        }
        Ok(())
    }
}

#[tokio::test]
async fn load_renders_badge_and_options_in_host_order() {
    let bridge = RecordingBridge::new("default", &["default", "staging"]);
    let controller = ProfileController::load(&bridge).await.unwrap();
    let view = controller.view();

    assert_eq!(controller.phase(), Phase::Ready);
    assert_eq!(view.badge.text, "default");
    assert_eq!(view.badge.label, "Current profile");
    assert_eq!(view.badge.style.background, "#e5e5e5");
    assert_eq!(view.option_names(), ["default", "staging"]);
    assert_eq!(
        bridge.calls(),
        [Call::GetActiveProfile, Call::GetExistingProfiles]
    );
}

#[tokio::test]
async fn active_profile_is_preselected() {
    let bridge = RecordingBridge::new("staging", &["default", "staging"]);
    let controller = ProfileController::load(&bridge).await.unwrap();

    assert_eq!(controller.selected(), Some("staging"));
    let selected = controller
        .view()
        .options
        .iter()
        .filter(|option| option.selected)
        .count();
    assert_eq!(selected, 1);
}

#[tokio::test]
async fn first_profile_is_selected_when_active_is_unlisted() {
    let bridge = RecordingBridge::new("default", &["alpha", "beta"]);
    let controller = ProfileController::load(&bridge).await.unwrap();
    assert_eq!(controller.selected(), Some("alpha"));
}

#[tokio::test]
async fn duplicate_host_entries_render_as_duplicate_options() {
    let bridge = RecordingBridge::new("work", &["work", "work"]);
    let controller = ProfileController::load(&bridge).await.unwrap();
    let view = controller.view();

    assert_eq!(view.option_names(), ["work", "work"]);
    assert!(view.options[0].selected);
    assert!(!view.options[1].selected);
}

#[tokio::test]
async fn select_and_restart_sets_profile_before_restarting() {
    let bridge = RecordingBridge::new("default", &["default", "staging"]);
    let mut controller = ProfileController::load(&bridge).await.unwrap();

    controller.select("staging").unwrap();
    let outcome = controller.restart_selected().await.unwrap();

    assert_eq!(outcome.profile, "staging");
    assert_eq!(controller.phase(), Phase::Restarted);
    assert_eq!(
        bridge.calls_after_load(),
        [
            Call::SetActiveProfileStarted("staging".to_string()),
            Call::SetActiveProfileResolved("staging".to_string()),
            Call::Restart,
        ]
    );
}

#[tokio::test]
async fn failed_set_active_profile_never_restarts() {
    let bridge = RecordingBridge {
        fail_set_active: true,
        ..RecordingBridge::new("default", &["default", "staging"])
    };
    let mut controller = ProfileController::load(&bridge).await.unwrap();
    controller.select("staging").unwrap();

    let err = controller.restart_selected().await.unwrap_err();

    assert!(matches!(err, AppError::Bridge(_)));
    assert!(!bridge.calls().contains(&Call::Restart));
    assert_eq!(controller.phase(), Phase::Ready);
    assert!(controller.last_error().unwrap().contains("disk full"));
    assert_eq!(
        controller.view().last_error.as_deref(),
        controller.last_error()
    );
}

#[tokio::test]
async fn failed_restart_returns_to_ready_for_retry() {
    let bridge = RecordingBridge {
        fail_restart: true,
        ..RecordingBridge::new("default", &["default", "staging"])
    };
    let mut controller = ProfileController::load(&bridge).await.unwrap();

    assert!(controller.restart_selected().await.is_err());
    assert_eq!(controller.phase(), Phase::Ready);

    assert!(controller.restart_selected().await.is_err());
    let restarts = bridge
        .calls()
        .iter()
        .filter(|call| **call == Call::Restart)
        .count();
    assert_eq!(restarts, 2);
}

#[tokio::test]
async fn selecting_an_unlisted_profile_is_rejected() {
    let bridge = RecordingBridge::new("default", &["default"]);
    let mut controller = ProfileController::load(&bridge).await.unwrap();

    assert!(matches!(
        controller.select("ghost"),
        Err(AppError::InvalidInput(_))
    ));
    assert_eq!(controller.selected(), Some("default"));
}

#[tokio::test]
async fn empty_profile_list_has_nothing_to_restart_into() {
    let bridge = RecordingBridge::new("default", &[]);
    let mut controller = ProfileController::load(&bridge).await.unwrap();

    assert_eq!(controller.selected(), None);
    assert!(matches!(
        controller.restart_selected().await,
        Err(AppError::InvalidInput(_))
    ));
    assert!(bridge.calls_after_load().is_empty());
    assert_eq!(controller.phase(), Phase::Ready);
}

#[tokio::test]
async fn new_profile_field_validates_live() {
    let bridge = RecordingBridge::new("default", &["default", "staging"]);
    let mut controller = ProfileController::load(&bridge).await.unwrap();

    let validity = controller.input_new_profile("staging").clone();
    assert_eq!(
        validity,
        Validity::Invalid(DUPLICATE_PROFILE_MESSAGE.to_string())
    );
    assert_eq!(
        controller.view().new_profile.validity.message(),
        "A profile with this name already exists."
    );

    assert!(controller.input_new_profile("canary").is_valid());
    assert_eq!(controller.view().new_profile.value, "canary");
    assert_eq!(controller.view().new_profile.validity.message(), "");
}

#[tokio::test]
async fn invalid_new_profile_is_never_submitted() {
    let bridge = RecordingBridge::new("default", &["default", "staging"]);
    let mut controller = ProfileController::load(&bridge).await.unwrap();
    controller.input_new_profile("staging");

    match controller.submit_new_profile().await {
        Err(AppError::Validation(message)) => assert_eq!(message, DUPLICATE_PROFILE_MESSAGE),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(bridge.calls_after_load().is_empty());
    assert_eq!(controller.phase(), Phase::Ready);
}

#[tokio::test]
async fn empty_new_profile_is_not_submitted() {
    let bridge = RecordingBridge::new("default", &["default"]);
    let mut controller = ProfileController::load(&bridge).await.unwrap();

    assert!(controller.input_new_profile("  ").is_valid());
    assert!(matches!(
        controller.submit_new_profile().await,
        Err(AppError::InvalidInput(_))
    ));
    assert!(bridge.calls_after_load().is_empty());
}

#[tokio::test]
async fn create_and_restart_uses_typed_name() {
    let bridge = RecordingBridge::new("default", &["default", "staging"]);
    let mut controller = ProfileController::load(&bridge).await.unwrap();

    controller.input_new_profile("staging");
    controller.input_new_profile("canary");
    let outcome = controller.submit_new_profile().await.unwrap();

    assert_eq!(outcome.profile, "canary");
    assert_eq!(
        bridge.calls_after_load(),
        [
            Call::SetActiveProfileStarted("canary".to_string()),
            Call::SetActiveProfileResolved("canary".to_string()),
            Call::Restart,
        ]
    );
}

#[tokio::test]
async fn created_profile_is_not_added_to_the_snapshot() {
    let bridge = RecordingBridge::new("default", &["default"]);
    let mut controller = ProfileController::load(&bridge).await.unwrap();

    controller.input_new_profile("canary");
    controller.submit_new_profile().await.unwrap();

    assert_eq!(controller.profiles(), ["default"]);
}

#[tokio::test]
async fn no_second_flow_after_restart() {
    let bridge = RecordingBridge::new("default", &["default", "staging"]);
    let mut controller = ProfileController::load(&bridge).await.unwrap();
    controller.restart_selected().await.unwrap();

    controller.input_new_profile("canary");
    assert!(matches!(
        controller.submit_new_profile().await,
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        controller.restart_selected().await,
        Err(AppError::InvalidInput(_))
    ));
    assert_eq!(
        bridge
            .calls()
            .iter()
            .filter(|call| **call == Call::Restart)
            .count(),
        1
    );
}
