pub mod controller;
pub mod validation;
pub mod view;

pub use controller::{FlowOutcome, Phase, ProfileController};
pub use validation::{DUPLICATE_PROFILE_MESSAGE, Validity, validate_new_profile};
pub use view::{ProfileBadge, ProfileOption, ProfileView};
